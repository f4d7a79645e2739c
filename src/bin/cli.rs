// BookLing Core - Storybook Reading for Mobile
// Copyright (C) 2025 BookLing contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


use anyhow::Result;
use bookling_core::catalog::{CatalogLatency, CatalogProvider, StaticCatalog};
use bookling_core::reader::{Advance, ReaderSession};
use bookling_core::storage::{SqliteStore, StorageFacade};
use bookling_core::{LibraryService, ProfileService};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookling-cli")]
#[command(about = "BookLing CLI - Desktop testing tool", long_about = None)]
struct Cli {
    /// Path to the SQLite state database
    #[arg(long, default_value = "bookling.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Test the native bridge
    Test {
        /// Message to send through the bridge
        #[arg(short, long, default_value = "Hello from CLI!")]
        message: String,
    },
    /// List the catalog
    Books,
    /// Show the library view (finished / pending / level)
    Library,
    /// Read a book chapter by chapter to the end
    Read {
        /// Book ID
        id: String,
        /// Start at this 0-based chapter instead of the saved cursor
        #[arg(short, long)]
        chapter: Option<usize>,
    },
    /// Show profile stats
    Profile,
    /// Set the nickname
    Nickname { name: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let storage = StorageFacade::new(SqliteStore::new(&cli.db).await?);
    let catalog = StaticCatalog::with_latency(CatalogLatency::none());
    let library = LibraryService::new(catalog, storage.clone());
    let profile = ProfileService::new(storage);

    match cli.command {
        Commands::Test { message } => {
            println!("{}", bookling_core::bridge_probe(message));
            println!("core version: {}", bookling_core::core_version());
        }
        Commands::Books => {
            for book in library.catalog().fetch_books().await? {
                println!(
                    "{:>3}  {} [{}] ({} chapters)",
                    book.id,
                    book.title,
                    book.category,
                    book.chapter_count()
                );
            }
        }
        Commands::Library => {
            let snapshot = library.load().await?;
            println!("Level: {}", snapshot.reader_level);
            println!("Finished ({}):", snapshot.finished_books.len());
            for book in &snapshot.finished_books {
                println!("  {}", book.title);
            }
            println!("Pending ({}):", snapshot.pending_books.len());
            for book in &snapshot.pending_books {
                let resume = profile.resume_target(&book.id).await;
                println!("  {} (chapter {})", book.title, resume.chapter_index + 1);
            }
        }
        Commands::Read { id, chapter } => {
            library.mark_as_pending(&id).await?;
            let mut session = ReaderSession::open(library.clone(), &id, chapter).await?;
            profile.record_reading_day().await?;
            println!("{}", session.book().title);
            loop {
                let progress = session.progress();
                println!(
                    "\n--- Chapter {} of {}: {} ---",
                    progress.chapter_number,
                    progress.chapter_count,
                    session.current_chapter().title
                );
                println!("{}", session.current_chapter().content);
                match session.advance().await? {
                    Advance::Turned { .. } => {}
                    Advance::Finished => {
                        println!(
                            "\nFinished! Level is now: {}",
                            library.load().await?.reader_level
                        );
                        break;
                    }
                }
            }
        }
        Commands::Profile => {
            let stats = profile.stats().await;
            println!("Nickname:   {}", profile.nickname().await);
            println!("Books read: {}", stats.books_read);
            println!("Pending:    {}", stats.pending);
            println!("Day streak: {}", stats.day_streak);
            println!("Badges:     {}", stats.badges);
        }
        Commands::Nickname { name } => {
            let stored = profile.set_nickname(&name).await?;
            println!("Nickname set to {stored}");
        }
    }

    Ok(())
}
