//! A terminal-style portfolio.
//!
//! Visitors type shell-like commands (`help`, `ls`, `cd projects`,
//! `open <id>`) into a simulated terminal. The [`interpreter`] turns each line
//! into a [`session::Dispatch`], the [`shell`] folds it into the session
//! state, and [`view`] picks the content panel shown beside the terminal. The
//! [`app`] (egui) and [`console`] (crossterm) frontends only render.

pub mod app;
pub mod boot;
pub mod command;
pub mod complete;
pub mod config;
pub mod console;
pub mod content;
pub mod error;
pub mod input;
pub mod interpreter;
pub mod session;
pub mod shell;
pub mod theme;
pub mod view;
