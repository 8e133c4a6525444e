use cactpot_core::{analyze, Analysis, Board, LineId, PayoutTable, RngState, Ticket, CELL_COUNT};
use cactpot_data::{default_payouts, load_payouts};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// The kiosk reveals one cell for free and lets the player scratch until
/// four cells are showing; then a line has to be picked.
const REVEAL_LIMIT: usize = 4;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("solve") => cmd_solve(&args[1..]),
        Some("play") => cmd_play(&args[1..]),
        Some("help") | Some("--help") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => Err(format!("unknown command: {other} (try `help`)").into()),
    }
}

fn print_usage() {
    println!("cactpot - scratch lottery line analyzer");
    println!();
    println!("usage:");
    println!("  cactpot solve <board> [--payouts <file>] [--json]");
    println!("  cactpot play [--seed <n>] [--payouts <file>]");
    println!();
    println!("<board> lists the 9 cells row by row, e.g. 1,2,3,4,5,6,7,8,0");
    println!("or 12345678_ - use 0, '_' or '.' for a cell not yet scratched.");
}

fn cmd_solve(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut board_arg: Option<&str> = None;
    let mut payouts = default_payouts();
    let mut as_json = false;

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--payouts" => {
                let path = rest.next().ok_or("--payouts needs a file path")?;
                payouts = load_payouts(Path::new(path))?;
            }
            "--json" => as_json = true,
            text if board_arg.is_none() => board_arg = Some(text),
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }

    let cells = parse_board(board_arg.ok_or("solve needs a board argument")?)?;
    let board = Board::from_cells(&cells)?;
    let analysis = analyze(&board, &payouts);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_board(&board);
        print_analysis(&analysis, &payouts);
    }
    Ok(())
}

fn cmd_play(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut seed: Option<u64> = None;
    let mut payouts = default_payouts();

    let mut rest = args.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--seed" => {
                let value = rest.next().ok_or("--seed needs a number")?;
                seed = Some(value.parse::<u64>().map_err(|_| "invalid seed")?);
            }
            "--payouts" => {
                let path = rest.next().ok_or("--payouts needs a file path")?;
                payouts = load_payouts(Path::new(path))?;
            }
            other => return Err(format!("unexpected argument: {other}").into()),
        }
    }

    let seed = seed.unwrap_or_else(clock_seed);
    let mut rng = RngState::from_seed(seed);
    let mut ticket = Ticket::deal(&mut rng);
    println!("dealt a fresh ticket (seed {seed})");

    // The kiosk scratches the first cell itself.
    let mut order: Vec<usize> = (0..CELL_COUNT).collect();
    rng.shuffle(&mut order);
    let opened = order[0];
    let value = ticket.scratch(opened);
    println!("the kiosk reveals cell {opened}: {value}");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while ticket.revealed_count() < REVEAL_LIMIT {
        let board = ticket.board();
        let analysis = analyze(&board, &payouts);
        let suggested = match analysis.best_scratch {
            Some(cell) => cell,
            None => break,
        };

        println!();
        print_board(&board);
        println!(
            "scratches used: {}/{REVEAL_LIMIT}, suggested next: cell {suggested}",
            ticket.revealed_count()
        );
        let choice = match prompt_line(&mut input, "scratch which cell? (enter = suggestion) ")? {
            Some(text) => text,
            None => String::new(),
        };
        let cell = if choice.is_empty() {
            suggested
        } else {
            match choice.parse::<usize>() {
                Ok(cell) if cell < CELL_COUNT => cell,
                _ => {
                    println!("pick a cell index between 0 and 8");
                    continue;
                }
            }
        };
        if ticket.is_revealed(cell) {
            println!("cell {cell} is already revealed");
            continue;
        }
        let value = ticket.scratch(cell);
        println!("cell {cell} shows {value}");
    }

    let board = ticket.board();
    let analysis = analyze(&board, &payouts);
    println!();
    print_board(&board);
    print_analysis(&analysis, &payouts);

    let line = loop {
        let choice = match prompt_line(&mut input, "commit to which line? (enter = suggestion) ")? {
            Some(text) => text,
            None => String::new(),
        };
        if choice.is_empty() {
            break analysis.best_line;
        }
        match LineId::from_id(&choice) {
            Some(line) => break line,
            None => {
                let ids: Vec<&str> = LineId::ALL.iter().map(|line| line.id()).collect();
                println!("unknown line, expected one of: {}", ids.join(", "));
            }
        }
    };

    let (sum, payout) = ticket.settle_line(line, &payouts);
    println!();
    println!("full ticket:");
    print_full_ticket(&ticket);
    println!(
        "{} sums to {sum} and pays {payout} (expected value was {:.1})",
        line.id(),
        analysis.line(line).expected_value
    );
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0xCAC7)
}

fn prompt_line(
    input: &mut impl BufRead,
    prompt: &str,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // stdin closed: fall back to the suggestion so piped runs finish.
        println!();
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_board(text: &str) -> Result<Vec<u8>, String> {
    let tokens: Vec<String> = if text.contains(',') {
        text.split(',').map(|token| token.trim().to_string()).collect()
    } else {
        text.chars().map(|cell| cell.to_string()).collect()
    };
    tokens
        .iter()
        .map(|token| match token.as_str() {
            "_" | "." | "0" => Ok(0),
            digit => digit
                .parse::<u8>()
                .map_err(|_| format!("bad cell value: {token}")),
        })
        .collect()
}

fn print_board(board: &Board) {
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let value = board.cell(row * 3 + col);
                if value == 0 {
                    "_".to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}

fn print_full_ticket(ticket: &Ticket) {
    let mut revealed = ticket.clone();
    for cell in 0..CELL_COUNT {
        revealed.scratch(cell);
    }
    print_board(&revealed.board());
}

fn print_analysis(analysis: &Analysis, payouts: &PayoutTable) {
    println!();
    println!("completions considered: {}", analysis.candidates);
    println!("line       expected      top payout");
    for report in &analysis.lines {
        let marker = if report.line == analysis.best_line {
            '>'
        } else {
            ' '
        };
        println!(
            "{marker} {:<9}{:>10.1}{:>16}",
            report.line.id(),
            report.expected_value,
            report.max_payout
        );
    }

    let best = analysis.line(analysis.best_line);
    println!();
    println!(
        "best line: {} (expected {:.1})",
        best.line.id(),
        best.expected_value
    );
    for (&payout, probability) in best.payout_probabilities.iter().rev() {
        let scenarios = best
            .winning_scenarios
            .get(&payout)
            .map(|tuples| format_scenarios(tuples))
            .unwrap_or_default();
        if scenarios.is_empty() {
            println!("  {payout:>7}  {:>5.1}%", probability * 100.0);
        } else {
            println!(
                "  {payout:>7}  {:>5.1}%  needs {scenarios}",
                probability * 100.0
            );
        }
    }

    if let Some(cell) = analysis.best_scratch {
        println!("suggested scratch: cell {cell}");
    }

    println!();
    println!("payouts ('*' still reachable):");
    for (sum, payout) in payouts.entries() {
        let marker = if analysis.possible_sums.contains(&sum) {
            '*'
        } else {
            ' '
        };
        println!("  {sum:>2}  {payout:>7} {marker}");
    }
}

fn format_scenarios(tuples: &[Vec<u8>]) -> String {
    const SHOWN: usize = 6;
    let mut parts: Vec<String> = tuples
        .iter()
        .filter(|tuple| !tuple.is_empty())
        .take(SHOWN)
        .map(|tuple| {
            tuple
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join("+")
        })
        .collect();
    if tuples.len() > SHOWN {
        parts.push(format!("... {} more", tuples.len() - SHOWN));
    }
    parts.join(" / ")
}
