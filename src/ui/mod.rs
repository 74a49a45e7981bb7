// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the quiz form.

pub mod answer;
pub mod question;
pub mod quiz;
