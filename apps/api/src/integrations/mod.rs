// External integrations (job boards, calendars, mail) are synced by a separate service.
// This module only guards and forwards the "sync all" call; it owns no integration logic.

pub mod client;
pub mod handlers;
pub mod session;
