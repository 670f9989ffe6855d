//! Career roadmap generation — the one real feature of this service.
//!
//! Flow: validated CareerProfile → prompt build → provider call (with bounded
//! retries) → shape validation of the model output → CareerRoadmap or failure.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
