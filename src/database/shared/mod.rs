// ABOUTME: Helpers shared across repositories: enum codecs and row mappers
// ABOUTME: Keeps per-repository files focused on SQL and scope handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RDL Platform

pub mod enums;
pub mod mappers;
