pub mod catalog;
pub mod fallback_service;
pub mod planner_service;
