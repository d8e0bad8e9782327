use super::{eval, printers, Monitor};
use crate::logger;

/// What the REPL driver should do after a handler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

type Handler = fn(&mut Monitor<'_>, Option<&str>) -> Outcome;

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    handler: Handler,
}

/// The command table. Declaration order is what `help` prints, so keep the
/// common verbs first. No dynamic registration; dispatch is a linear scan.
pub static COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Display information about all supported commands",
        handler: cmd_help,
    },
    Command {
        name: "c",
        description: "Continue execution of the machine",
        handler: cmd_c,
    },
    Command {
        name: "q",
        description: "Quit the monitor",
        handler: cmd_q,
    },
    Command {
        name: "si",
        description: "Step through N instructions (default 1)",
        handler: cmd_si,
    },
    Command {
        name: "info",
        description: "Show register state (info r) or watchpoints (info w)",
        handler: cmd_info,
    },
    Command {
        name: "x",
        description: "Scan memory: x <count> <addr-expr>",
        handler: cmd_x,
    },
    Command {
        name: "p",
        description: "Evaluate an expression and print its signed value",
        handler: cmd_p,
    },
    Command {
        name: "w",
        description: "Set a watchpoint on an expression",
        handler: cmd_w,
    },
    Command {
        name: "d",
        description: "Delete a watchpoint by id",
        handler: cmd_d,
    },
];

pub fn dispatch(monitor: &mut Monitor<'_>, verb: &str, args: Option<&str>) -> Outcome {
    for command in COMMANDS {
        if command.name == verb {
            return (command.handler)(monitor, args);
        }
    }
    println!("unknown command: '{}'", verb);
    Outcome::Continue
}

fn cmd_help(_monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    match args.and_then(|a| a.split_whitespace().next()) {
        None => {
            for command in COMMANDS {
                println!("{} - {}", command.name, command.description);
            }
        }
        Some(name) => match COMMANDS.iter().find(|c| c.name == name) {
            Some(command) => println!("{} - {}", command.name, command.description),
            None => println!("unknown command: '{}'", name),
        },
    }
    Outcome::Continue
}

fn cmd_c(monitor: &mut Monitor<'_>, _args: Option<&str>) -> Outcome {
    logger::record("continue");
    monitor.machine.execute(-1);
    Outcome::Continue
}

fn cmd_q(monitor: &mut Monitor<'_>, _args: Option<&str>) -> Outcome {
    monitor.machine.request_quit();
    Outcome::Exit
}

fn cmd_si(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    // No argument steps once; a token that fails to parse steps zero times.
    let steps = match args.and_then(|a| a.split_whitespace().next()) {
        None => 1,
        Some(token) => token.parse::<i64>().unwrap_or(0),
    };
    logger::record(&format!("si {}", steps));
    monitor.machine.execute(steps);
    Outcome::Continue
}

fn cmd_info(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    match args.map(str::trim) {
        Some("r") => monitor.machine.display_registers(),
        Some("w") => {
            if monitor.watchpoints.is_empty() {
                println!("no watchpoints set");
            } else {
                printers::print_watchpoints(monitor.watchpoints.iter());
            }
        }
        _ => println!("unknown parameter: expected 'info r' or 'info w'"),
    }
    Outcome::Continue
}

fn cmd_x(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    let Some(rest) = args else {
        println!("usage: x <count> <addr-expr>");
        return Outcome::Continue;
    };
    let mut parts = rest.splitn(2, char::is_whitespace);
    let count_token = parts.next().unwrap_or("");
    let Some(addr_expr) = parts.next().map(str::trim).filter(|e| !e.is_empty()) else {
        println!("usage: x <count> <addr-expr>");
        return Outcome::Continue;
    };
    let Ok(count) = count_token.parse::<usize>() else {
        println!("invalid count: '{}'", count_token);
        return Outcome::Continue;
    };
    let Some(addr) = eval::eval(&*monitor.machine, addr_expr) else {
        println!("cannot evaluate address '{}'", addr_expr);
        return Outcome::Continue;
    };

    // Four bytes per requested unit, fetched one at a time.
    let bytes: Vec<u8> = (0..4 * count as u64)
        .map(|i| {
            monitor
                .machine
                .read_memory(addr.wrapping_add(i), 1)
                .first()
                .copied()
                .unwrap_or(0)
        })
        .collect();
    printers::print_byte_row(&bytes);
    Outcome::Continue
}

fn cmd_p(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    let Some(expr) = args else {
        println!("usage: p <expr>");
        return Outcome::Continue;
    };
    match eval::eval_signed(&*monitor.machine, expr) {
        Some(value) => println!("val = {}", value),
        None => println!("cannot evaluate expression '{}'", expr),
    }
    Outcome::Continue
}

fn cmd_w(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    let Some(expr) = args.map(str::trim).filter(|e| !e.is_empty()) else {
        println!("usage: w <expr>");
        return Outcome::Continue;
    };
    // A condition that does not evaluate is not worth watching.
    let Some(value) = eval::eval(&*monitor.machine, expr) else {
        println!("cannot evaluate expression '{}'; no watchpoint set", expr);
        return Outcome::Continue;
    };
    match monitor.watchpoints.allocate(expr, value) {
        Ok(id) => println!("watchpoint {} set: {}", id, expr),
        Err(err) => println!(
            "{}: {} of {} slots in use",
            err,
            monitor.watchpoints.len(),
            monitor.watchpoints.capacity()
        ),
    }
    Outcome::Continue
}

fn cmd_d(monitor: &mut Monitor<'_>, args: Option<&str>) -> Outcome {
    let Some(token) = args.and_then(|a| a.split_whitespace().next()) else {
        println!("unknown parameter: usage: d <id>");
        return Outcome::Continue;
    };
    let Ok(id) = token.parse::<u32>() else {
        println!("invalid watchpoint id: '{}'", token);
        return Outcome::Continue;
    };
    if monitor.watchpoints.delete(id) {
        println!("watchpoint {} deleted", id);
    } else {
        println!("no watchpoint with id {}", id);
    }
    Outcome::Continue
}
