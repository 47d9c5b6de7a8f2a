// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Thirteen Water command line tool.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logs.
    #[clap(long, short, global = true)]
    verbose: bool,
    /// Print results as JSON.
    #[clap(long, global = true)]
    json: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classify a 3 or 5 cards hand.
    Classify {
        /// The hand cards, i.e. "AS KS QS JS TS".
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Check the segments order of an arrangement.
    Validate {
        /// The front segment cards.
        #[clap(long, short)]
        front: String,
        /// The middle segment cards.
        #[clap(long, short)]
        middle: String,
        /// The back segment cards.
        #[clap(long, short)]
        back: String,
    },
    /// Detect the special hand of 13 dealt cards.
    Detect {
        /// The dealt cards.
        #[clap(required = true)]
        cards: Vec<String>,
    },
    /// Search the best arrangements for 13 dealt cards.
    Suggest {
        /// The dealt cards.
        #[clap(required = true)]
        cards: Vec<String>,
        /// Number of arrangements to return.
        #[clap(long, short, default_value_t = 3)]
        top: usize,
        /// Maximum number of partitions to examine.
        #[clap(long)]
        budget: Option<usize>,
        /// Number of search tasks.
        #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
    /// Deal, arrange, and score a round.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=4))]
        players: u8,
        /// The shuffle seed.
        #[clap(long, short)]
        seed: Option<u64>,
        /// A JSON file with the scoring rules.
        #[clap(long, short)]
        rules: Option<PathBuf>,
        /// Number of search tasks.
        #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..=64))]
        tasks: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Command::Classify { cards } => commands::classify(&cards.join(" "), json),
        Command::Validate {
            front,
            middle,
            back,
        } => commands::validate(&front, &middle, &back, json),
        Command::Detect { cards } => commands::detect(&cards.join(" "), json),
        Command::Suggest {
            cards,
            top,
            budget,
            tasks,
        } => commands::suggest(&cards.join(" "), top, budget, tasks as usize, json),
        Command::Deal {
            players,
            seed,
            rules,
            tasks,
        } => commands::deal(players as usize, seed, rules, tasks as usize, json),
    }
}
