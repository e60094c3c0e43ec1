//! Shared test harness modules for the stopcover CLI.

use super::*;

mod helpers;
