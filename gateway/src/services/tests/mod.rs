//! Tests for gateway services

mod pricing;
