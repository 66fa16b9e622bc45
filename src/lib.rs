//! AdScout - Conversational Digital Marketing Intake Assistant
//!
//! This crate implements a Telegram-delivered intake dialogue that collects
//! structured business data, suggests keywords from a static dataset, and
//! answers follow-up marketing questions through an AI completion service.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
