//! Tests for template parsing and substitution

use super::*;

mod helpers;

mod render_literal;
