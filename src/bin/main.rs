use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use morph_core::{Aspect, Config, Inflection, MorphologyEngine, Number, Person, Tense, Voice};
use std::io::{stdin, stdout, BufRead, Write};

fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    let mut engine = config.open_engine();

    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "English Morphology Engine".bold());
    println!("---------------------------------------------------------------");
    print_help();
    println!("Overrides are kept in '{}'.", config.data_dir.display());

    let stdin = stdin();
    loop {
        print!("\n[{}] > ", engine.language().cyan());
        stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match run_command(&mut engine, input) {
            Some(output) => println!("{}", output.green()),
            None => println!("{}", "Unrecognized command. Type 'help'.".red()),
        }
    }
    Ok(())
}

fn print_help() {
    println!("  <op> <word>          ops: {}", op_names().join(", "));
    println!("  last <op> <text>     apply an op to the last word of a text");
    println!("  neg|negc <text>      negate (negc contracts)");
    println!("  ask <text>           yes/no question");
    println!("  wh <wh-word> <text>  wh-question");
    println!("  not <text>           insert 'not'");
    println!("  article <word>       choose a/an");
    println!("  pronoun <word>       list pronoun forms");
    println!("  conj <verb> <1|2|3> <sg|pl> <past|present|future> <simple|progressive|perfect|perfect-progressive> [passive]");
    println!("  set <op> <word> <form> | keep <word>   add an override");
    println!("  lang <tag> | help | exit");
}

fn op_names() -> Vec<&'static str> {
    Inflection::ALL.iter().map(|op| op.name()).collect()
}

fn run_command(engine: &mut MorphologyEngine, input: &str) -> Option<String> {
    let (command, rest) = input.split_once(' ').unwrap_or((input, ""));
    let rest = rest.trim();

    if let Some(op) = Inflection::from_name(command) {
        return Some(engine.apply(op, rest));
    }
    match command {
        "help" => {
            print_help();
            Some(String::new())
        }
        "lang" => {
            engine.set_language(rest);
            Some(format!("language set to '{}'", engine.language()))
        }
        "last" => {
            let (op, text) = rest.split_once(' ')?;
            Some(engine.apply_to_last_word(text, Inflection::from_name(op)?))
        }
        "neg" => Some(engine.negate(rest, false)),
        "negc" => Some(engine.negate(rest, true)),
        "ask" => Some(engine.yes_no_question(rest)),
        "wh" => {
            let (wh, text) = rest.split_once(' ')?;
            Some(engine.wh_question(text, wh))
        }
        "not" => Some(engine.insert_not(rest)),
        "article" => Some(engine.with_article(rest)),
        "pronoun" => engine
            .pronoun_variants(rest)
            .map(|forms| forms.to_vec().join(", "))
            .or_else(|| Some(format!("'{rest}' is not a pronoun"))),
        "conj" => conjugate(engine, rest),
        "set" => {
            let mut parts = rest.split_whitespace();
            let (op, word, form) = (Inflection::from_name(parts.next()?)?, parts.next()?, parts.next()?);
            Some(save(engine.update_overrides(|o| o.set(op, word, form))))
        }
        "keep" if !rest.is_empty() => Some(save(engine.update_overrides(|o| o.keep_unchanged(rest)))),
        _ => None,
    }
}

fn save(result: morph_core::Result<()>) -> String {
    match result {
        Ok(()) => "saved".to_string(),
        Err(e) => format!("kept for this session only: {e}"),
    }
}

fn conjugate(engine: &MorphologyEngine, args: &str) -> Option<String> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.len() < 5 {
        return None;
    }
    let person = match parts[1] {
        "1" => Person::First,
        "2" => Person::Second,
        "3" => Person::Third,
        _ => return None,
    };
    let number = match parts[2] {
        "sg" => Number::Singular,
        "pl" => Number::Plural,
        _ => return None,
    };
    let tense = match parts[3] {
        "past" => Tense::Past,
        "present" => Tense::Present,
        "future" => Tense::Future,
        _ => return None,
    };
    let aspect = match parts[4] {
        "simple" => Aspect::Simple,
        "progressive" => Aspect::Progressive,
        "perfect" => Aspect::Perfect,
        "perfect-progressive" => Aspect::PerfectProgressive,
        _ => return None,
    };
    let voice = if parts.get(5) == Some(&"passive") { Voice::Passive } else { Voice::Active };
    Some(engine.conjugate(parts[0], person, number, tense, aspect, voice))
}
