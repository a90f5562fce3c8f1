//! EmpathyAI - Emotion-aware conversational support
//!
//! This crate composes empathetic replies from an emotion label and the
//! user's message, and serves them over HTTP alongside feedback capture
//! and speech transcription.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
