//! Bookmark subcommand implementations.

mod clear;
mod list;
mod remove;
mod toggle;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::context::Context;

#[derive(Args, Debug)]
pub struct BookmarkCommand {
    #[command(subcommand)]
    pub command: BookmarkSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum BookmarkSubcommand {
    /// Bookmark a listing, or remove its bookmark
    Toggle(toggle::ToggleArgs),

    /// List saved bookmarks
    List(list::ListArgs),

    /// Remove one bookmark by key
    Remove(remove::RemoveArgs),

    /// Remove every bookmark
    Clear(clear::ClearArgs),
}

pub async fn handle(ctx: &Context, cmd: BookmarkCommand) -> Result<()> {
    match cmd.command {
        BookmarkSubcommand::Toggle(args) => toggle::run(ctx, args).await,
        BookmarkSubcommand::List(args) => list::run(ctx, args).await,
        BookmarkSubcommand::Remove(args) => remove::run(ctx, args).await,
        BookmarkSubcommand::Clear(args) => clear::run(ctx, args).await,
    }
}
