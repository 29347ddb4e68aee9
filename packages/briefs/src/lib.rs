// ABOUTME: Brief and case study management for Pitchline
// ABOUTME: CRUD manager facades with boundary validation over an injected record store

pub mod manager;

pub use manager::{BriefManager, CaseStudyManager, ManagerError, ManagerResult};
