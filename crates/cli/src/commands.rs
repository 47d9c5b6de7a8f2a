// Copyright (C) 2025 Thirteen developers
// SPDX-License-Identifier: Apache-2.0

//! Command implementations.
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use std::{fs, path::PathBuf};

use thirteen_cards::{Card, Deck, parse_cards};
use thirteen_eval::{
    PairOutcome, PlayerHand, ScoringRules, Segment, SuggestOptions, Suggestion, Validity,
    classify as classify_hand, detect as detect_special, par_suggest, score, suggest_with,
    validate as validate_segments,
};

fn parse(cards: &str) -> Result<Vec<Card>> {
    parse_cards(cards).with_context(|| format!("invalid cards '{cards}'"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn join(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Prints a hand category and tiebreak ranks.
pub fn classify(cards: &str, json: bool) -> Result<()> {
    let hand = classify_hand(&parse(cards)?)?;
    if json {
        return print_json(&hand);
    }

    println!("{} {:?}", hand.category(), hand.tiebreak().ranks());
    Ok(())
}

/// Prints whether an arrangement is legal.
pub fn validate(front: &str, middle: &str, back: &str, json: bool) -> Result<()> {
    let validity = validate_segments(&parse(front)?, &parse(middle)?, &parse(back)?)?;
    if json {
        return print_json(&validity);
    }

    match validity {
        Validity::Legal => println!("legal"),
        Validity::Foul(foul) => println!("foul: {foul:?}"),
    }

    Ok(())
}

/// Prints the special hand of the dealt cards.
pub fn detect(cards: &str, json: bool) -> Result<()> {
    let dealt = parse(cards)?;
    let kind = detect_special(&dealt)?;
    if json {
        return print_json(&kind);
    }

    println!("{kind}");
    if let Some(layout) = kind.layout(&dealt)? {
        println!("{layout}");
    }

    Ok(())
}

/// Prints the best arrangements for the dealt cards.
pub fn suggest(
    cards: &str,
    top: usize,
    budget: Option<usize>,
    tasks: usize,
    json: bool,
) -> Result<()> {
    let dealt = parse(cards)?;
    let suggestion = search(&dealt, top, budget, tasks)?;
    if json {
        return print_json(&suggestion);
    }

    if !suggestion.complete {
        info!(
            "Search stopped after {} partitions, results may not be the best",
            suggestion.examined
        );
    }

    for (idx, ranked) in suggestion.arrangements.iter().enumerate() {
        println!(
            "{:>2}. {}  [{} / {} / {}] score {} ({})",
            idx + 1,
            ranked.arrangement,
            ranked.hands.front.category(),
            ranked.hands.middle.category(),
            ranked.hands.back.category(),
            ranked.score.weighted,
            ranked.score.ranks,
        );
    }

    Ok(())
}

fn search(dealt: &[Card], top: usize, budget: Option<usize>, tasks: usize) -> Result<Suggestion> {
    let suggestion = if tasks > 1 && budget.is_none() {
        par_suggest(dealt, top, tasks)?
    } else {
        let options = SuggestOptions {
            budget,
            ..SuggestOptions::default()
        };
        suggest_with(dealt, top, &options)?
    };

    Ok(suggestion)
}

fn load_rules(path: Option<PathBuf>) -> Result<ScoringRules> {
    let Some(path) = path else {
        return Ok(ScoringRules::default());
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("cannot read rules file {}", path.display()))?;
    let rules: ScoringRules = serde_json::from_str(&text)
        .with_context(|| format!("invalid rules file {}", path.display()))?;
    rules
        .check()
        .with_context(|| format!("invalid rules file {}", path.display()))?;

    debug!("Loaded rules from {}", path.display());
    Ok(rules)
}

#[derive(Debug, Serialize)]
struct DealReport {
    players: Vec<PlayerReport>,
    result: thirteen_eval::RoundResult,
}

#[derive(Debug, Serialize)]
struct PlayerReport {
    arrangement: thirteen_eval::PlayerArrangement,
    special: thirteen_eval::SpecialHandKind,
}

/// Deals a round, arranges each player with the best suggestion, and scores it.
pub fn deal(
    players: usize,
    seed: Option<u64>,
    rules: Option<PathBuf>,
    tasks: usize,
    json: bool,
) -> Result<()> {
    let rules = load_rules(rules)?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let hands = Deck::new_and_shuffled(&mut rng).deal_hands(players);

    let mut round = Vec::with_capacity(players);
    for (player, dealt) in hands.iter().enumerate() {
        debug!("P{player} dealt {}", join(dealt));
        let suggestion = search(dealt, 1, None, tasks)?;
        let Some(best) = suggestion.arrangements.into_iter().next() else {
            bail!("no legal arrangement for player {player}");
        };

        round.push(PlayerHand::with_detected_special(best.arrangement)?);
    }

    let result = score(&round, &rules)?;

    if json {
        let report = DealReport {
            players: round
                .into_iter()
                .map(|p| PlayerReport {
                    arrangement: p.arrangement,
                    special: p.special,
                })
                .collect(),
            result,
        };
        return print_json(&report);
    }

    for (player, hand) in round.iter().enumerate() {
        let mut line = format!("P{player}: {}", hand.arrangement);
        if hand.special.is_special() {
            line.push_str(&format!("  ({})", hand.special));
        }
        println!("{line}");
    }

    println!();
    for pair in &result.pairs {
        let detail = match pair.outcome {
            PairOutcome::Special { first, second } => format!("special {first} vs {second}"),
            PairOutcome::Segments {
                front,
                middle,
                back,
                scoop,
                ..
            } => {
                let segments = [front, middle, back]
                    .iter()
                    .zip(Segment::segments())
                    .map(|(o, s)| format!("{s} {:+}", o.points))
                    .collect::<Vec<_>>()
                    .join(", ");
                match scoop {
                    Some(_) => format!("{segments}, scoop"),
                    None => segments,
                }
            }
        };

        println!(
            "P{} vs P{}: {:+} ({detail})",
            pair.first, pair.second, pair.delta
        );
    }

    println!();
    for (player, net) in result.net.iter().enumerate() {
        println!("P{player} net {net:+}");
    }

    if !result.sweeps.is_empty() {
        info!("Sweeps: {:?}", result.sweeps);
    }

    Ok(())
}
