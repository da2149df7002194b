// Job postings and the kanban board view over them.
// The board is a pure filter-and-render pass; ordering and moves are owned by the client.

pub mod board;
pub mod handlers;
pub mod models;
