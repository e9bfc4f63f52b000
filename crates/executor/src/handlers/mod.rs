//! Command handlers organized by command kind.
//!
//! | Module | Commands | State touched |
//! |--------|----------|---------------|
//! | `set` | `SET SESSION`, `SET GLOBAL`, `SET CONFIG` | Session, Catalog, Config + LogSink |
//! | `export` | `EXPORT PROFILE` | Session profile history, file system |

pub mod export;
pub mod set;
