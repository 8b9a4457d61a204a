//! Deployment pipeline smoke-test endpoints.
//!
//! Two near-identical probe instances, each serving a fixed confirmation
//! string over HTTP on a fixed port. After rolling out a container, the
//! deployment pipeline requests `GET /` and compares the body byte-for-byte
//! against the expected literal to decide whether the rollout succeeded.
//!
//! The staging instance listens on port 5000, the production instance on
//! port 6000; each ships as its own binary (see `src/bin/`). Ports and
//! bodies are compile-time literals rather than configuration, because the
//! pipeline scripts address each instance by its hardcoded port.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod state;
