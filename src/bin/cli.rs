use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use ibc_fill_planner::{
    DayRow, FastestFill, FillOutcome, PlanConfig, PlanningSession, Scenario, ScenarioOutcome,
    Shift, export_schedule_to_csv, import_schedule_from_csv, load_plan_from_json,
    save_plan_to_json,
};

fn render_schedule_table(rows: &[DayRow]) -> String {
    let headers = ["day", "date", "capacity"];
    let cells: Vec<[String; 3]> = rows
        .iter()
        .map(|row| {
            [
                row.day.to_string(),
                row.date.format("%A, %Y-%m-%d").to_string(),
                row.capacity.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push('|');
    for (i, h) in headers.iter().enumerate() {
        out.push_str(&format!(" {:<width$} |", h, width = widths[i]));
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push('|');
        for (i, cell) in row.iter().enumerate() {
            out.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn render_capacity_chart(rows: &[DayRow]) -> String {
    let max_cap = rows.iter().map(|r| r.capacity).max().unwrap_or(0).max(1);
    // Scale bars down only when a day exceeds the display width.
    let max_bar = 50i64;
    let mut out = String::new();
    for row in rows {
        let bar_len = if max_cap <= max_bar {
            row.capacity
        } else {
            row.capacity * max_bar / max_cap
        };
        out.push_str(&format!(
            "{}  {} {}\n",
            row.date.format("%a %m-%d"),
            "#".repeat(bar_len as usize),
            row.capacity
        ));
    }
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                    Show this help\n  show                    Show the day schedule\n  chart                   Bar chart of daily capacity\n  start <YYYY-MM-DD>      Set schedule start date\n  shift <name>            Set starting shift (Morning|Day|Afternoon|Night)\n  horizon <days>          Set planning horizon length\n  caps <master> <day>     Set all-shifts and Day-shift capacities\n  cap <name> <value>      Set one shift's capacity\n  set <day> <value>       Override one day's capacity\n  zero <day>              Zero one day's capacity\n  plus5 <day>             Add 5 IBCs to one day\n  minus5 <day>            Remove 5 IBCs from one day (floor 0)\n  fill <target>           How fast to fill <target> IBCs\n  total <days>            How many IBCs in the first <days> days\n  save <path>             Save plan snapshot as JSON\n  load <path>             Load plan snapshot from JSON\n  export <path>           Export day table as CSV\n  import <path>           Import day table CSV (current config)\n  quit|exit               Exit"
    );
}

fn show(session: &PlanningSession) {
    match session.schedule().rows() {
        Ok(rows) => println!("{}", render_schedule_table(&rows)),
        Err(e) => println!("Error: {e}"),
    }
}

fn reconfigure(session: &mut PlanningSession, config: PlanConfig) {
    match session.apply_config(config) {
        Ok(true) => {
            println!("Schedule rebuilt (day edits reset).");
            show(session);
        }
        Ok(false) => println!("No change."),
        Err(e) => println!("Error: {e}"),
    }
}

fn main() {
    let mut config = PlanConfig::default();
    config.start_date = Local::now().date_naive();
    let mut session = match PlanningSession::new(config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return;
        }
    };

    println!("IBC Fill Planner (CLI) - type 'help' for commands\n");
    show(&session);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        if stdin.read_line(&mut line).is_err() {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => show(&session),
            "chart" => match session.schedule().rows() {
                Ok(rows) => println!("{}", render_capacity_chart(&rows)),
                Err(e) => println!("Error: {e}"),
            },
            "start" => match parts.next().map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d")) {
                Some(Ok(date)) => {
                    let mut cfg = session.config().clone();
                    cfg.start_date = date;
                    reconfigure(&mut session, cfg);
                }
                Some(Err(_)) => println!("Invalid date (YYYY-MM-DD)"),
                None => println!("Usage: start <YYYY-MM-DD>"),
            },
            "shift" => match parts.next().and_then(Shift::from_str) {
                Some(shift) => {
                    let mut cfg = session.config().clone();
                    cfg.starting_shift = shift;
                    reconfigure(&mut session, cfg);
                }
                None => println!("Usage: shift <Morning|Day|Afternoon|Night>"),
            },
            "horizon" => match parts.next().and_then(|s| s.parse::<i64>().ok()) {
                Some(days) => {
                    let mut cfg = session.config().clone();
                    cfg.horizon_days = days;
                    reconfigure(&mut session, cfg);
                }
                None => println!("Usage: horizon <days>"),
            },
            "caps" => {
                let master = parts.next().and_then(|s| s.parse::<i64>().ok());
                let day = parts.next().and_then(|s| s.parse::<i64>().ok());
                match (master, day) {
                    (Some(master), Some(day)) => {
                        let mut cfg = session.config().clone();
                        cfg.capacities =
                            ibc_fill_planner::ShiftCapacities::uniform(master, day);
                        reconfigure(&mut session, cfg);
                    }
                    _ => println!("Usage: caps <master> <day>"),
                }
            }
            "cap" => {
                let shift = parts.next().and_then(Shift::from_str);
                let value = parts.next().and_then(|s| s.parse::<i64>().ok());
                match (shift, value) {
                    (Some(shift), Some(value)) => {
                        let mut cfg = session.config().clone();
                        cfg.capacities.set(shift, value);
                        reconfigure(&mut session, cfg);
                    }
                    _ => println!("Usage: cap <name> <value>"),
                }
            }
            "set" | "zero" | "plus5" | "minus5" => {
                let idx = parts.next().and_then(|s| s.parse::<usize>().ok());
                let Some(idx) = idx else {
                    println!("Usage: {cmd} <day> ...");
                    continue;
                };
                let res = match cmd {
                    "set" => match parts.next().and_then(|s| s.parse::<i64>().ok()) {
                        Some(value) => session.set_capacity(idx, value),
                        None => {
                            println!("Usage: set <day> <value>");
                            continue;
                        }
                    },
                    "zero" => session.zero_capacity(idx),
                    "plus5" => session.adjust_capacity(idx, 5),
                    _ => session.adjust_capacity(idx, -5),
                };
                match res {
                    Ok(()) => show(&session),
                    Err(e) => println!("Error: {e}"),
                }
            }
            "fill" => match parts.next().and_then(|s| s.parse::<i64>().ok()) {
                Some(target) => {
                    match session.run(Scenario::FastestFill { target }) {
                        Ok(ScenarioOutcome::FastestFill(FillOutcome::Reached {
                            day_index,
                            date,
                            ..
                        })) => {
                            println!(
                                "Target of {target} IBCs reached in {} day(s), on {}",
                                day_index + 1,
                                date.format("%A, %Y-%m-%d")
                            );
                            // Per-shift refinement over the nominal configured capacities.
                            match FastestFill::new(session.schedule())
                                .execute_with_shifts(target)
                            {
                                Ok(FillOutcome::Reached {
                                    date,
                                    shift: Some(shift),
                                    ..
                                }) => println!(
                                    "Finish in: {} on {}",
                                    shift.label(),
                                    date.format("%A, %Y-%m-%d")
                                ),
                                Ok(_) => {}
                                Err(e) => println!("Error: {e}"),
                            }
                        }
                        Ok(ScenarioOutcome::FastestFill(FillOutcome::NotAchievable {
                            horizon_days,
                            total_capacity,
                        })) => println!(
                            "Not achievable in {horizon_days} days (total capacity {total_capacity})"
                        ),
                        Ok(_) => {}
                        Err(e) => println!("Error: {e}"),
                    }
                }
                None => println!("Usage: fill <target>"),
            },
            "total" => match parts.next().and_then(|s| s.parse::<usize>().ok()) {
                Some(days) => match session.run(Scenario::TotalOverWindow { days }) {
                    Ok(ScenarioOutcome::TotalOverWindow(total)) => {
                        println!("Total IBCs in {days} days: {total}")
                    }
                    Ok(_) => {}
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: total <days>"),
            },
            "save" => match parts.next() {
                Some(path) => match save_plan_to_json(session.schedule(), path) {
                    Ok(()) => println!("Saved plan to {path}"),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: save <path>"),
            },
            "load" => match parts.next() {
                Some(path) => match load_plan_from_json(path) {
                    Ok(schedule) => {
                        let config = schedule.config().clone();
                        match PlanningSession::new(config.clone()) {
                            Ok(mut fresh) => {
                                // Re-apply the saved per-day capacities onto the fresh session.
                                let caps = schedule.capacities().unwrap_or_default();
                                let mut ok = true;
                                for (idx, cap) in caps.iter().enumerate() {
                                    if fresh.set_capacity(idx, *cap).is_err() {
                                        ok = false;
                                        break;
                                    }
                                }
                                if ok {
                                    session = fresh;
                                    println!("Loaded plan from {path}");
                                    show(&session);
                                } else {
                                    println!("Error: snapshot capacities did not apply");
                                }
                            }
                            Err(e) => println!("Error: {e}"),
                        }
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: load <path>"),
            },
            "export" => match parts.next() {
                Some(path) => match export_schedule_to_csv(session.schedule(), path) {
                    Ok(()) => println!("Exported day table to {path}"),
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: export <path>"),
            },
            "import" => match parts.next() {
                Some(path) => match import_schedule_from_csv(session.config(), path) {
                    Ok(schedule) => {
                        let caps = schedule.capacities().unwrap_or_default();
                        let mut ok = true;
                        for (idx, cap) in caps.iter().enumerate() {
                            if session.set_capacity(idx, *cap).is_err() {
                                ok = false;
                                break;
                            }
                        }
                        if ok {
                            println!("Imported day table from {path}");
                            show(&session);
                        } else {
                            println!("Error: imported capacities did not apply");
                        }
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: import <path>"),
            },
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
