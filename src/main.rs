use std::process;

use clap::{App, Arg, ArgMatches, SubCommand};
use env_logger::Env;

use shelve::commands::{exec_command, Command};
use shelve::config::{self, NAME};
use shelve::errors::*;
use shelve::{EntryForm, JsonFile, Kind, Shelf};

fn app() -> App<'static, 'static> {
    App::new(NAME)
        .about("movie and book list")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(Arg::with_name("FILE")
                 .long("file")
                 .short("f")
                 .takes_value(true)
                 .global(true)
                 .help("data file to use instead of $SHELVE_FILE or the XDG data dir"))
        .subcommand(SubCommand::with_name("add")
                        .about("add entry")
                        .arg(Arg::with_name("TITLE")
                                 .required(true)
                                 .index(1)
                                 .help("title of the movie or book"))
                        .arg(Arg::with_name("GENRE")
                                 .required(true)
                                 .index(2)
                                 .help("genre of the work"))
                        .arg(Arg::with_name("DESCRIPTION")
                                 .required(true)
                                 .index(3)
                                 .help("short description"))
                        .arg(Arg::with_name("RATING")
                                 .long("rating")
                                 .short("r")
                                 .takes_value(true)
                                 .default_value("0")
                                 .allow_hyphen_values(true)
                                 .help("rating between 0 and 10"))
                        .arg(Arg::with_name("TYPE")
                                 .long("type")
                                 .short("t")
                                 .takes_value(true)
                                 .possible_values(&["movie", "book"])
                                 .default_value("movie")
                                 .help("whether the entry is a movie or a book")))
        .subcommand(SubCommand::with_name("list").about("list entries in the order they were added"))
        .subcommand(SubCommand::with_name("search")
                    .about("find entries. case insensitive match on 'TITLE', 'GENRE' and 'DESCRIPTION'")
                    .arg(Arg::with_name("QUERY")
                         .required(true)
                         .index(1)
                         .help("search query")))
        .subcommand(SubCommand::with_name("show")
                    .about("Show every field of an entry")
                    .arg(Arg::with_name("ENTRY_ID")
                         .required(true)
                         .index(1)
                         .help("ID of entry to show (acquire from `search` or `list`)")))
        .subcommand(SubCommand::with_name("finish")
                    .about("Mark an entry as finished")
                    .arg(Arg::with_name("ENTRY_ID")
                         .required(true)
                         .index(1)
                         .help("ID of entry to mark as finished (acquire from `search` or `list`)")))
}

fn required<'a>(matches: &'a ArgMatches, arg: &'static str) -> Result<&'a str> {
    matches
        .value_of(arg)
        .ok_or_else(|| ErrorKind::MissingArg(arg).into())
}

/// Global args only propagate down, so `--file` after a subcommand lives there.
fn file_flag<'a>(matches: &'a ArgMatches) -> Option<&'a str> {
    matches
        .subcommand()
        .1
        .and_then(|sub| sub.value_of("FILE"))
        .or_else(|| matches.value_of("FILE"))
}

fn parse_rating(raw: &str) -> Result<i64> {
    raw.parse()
        .chain_err(|| ErrorKind::UnreadableRating(raw.into()))
}

fn parse_command(matches: &ArgMatches) -> Result<Command> {
    let command = match matches.subcommand() {
        ("add", Some(add)) => Command::Add(EntryForm {
            title: required(add, "TITLE")?.into(),
            genre: required(add, "GENRE")?.into(),
            description: required(add, "DESCRIPTION")?.into(),
            rating: parse_rating(required(add, "RATING")?)?,
            kind: required(add, "TYPE")?.parse::<Kind>()?,
        }),
        ("list", Some(_)) => Command::List,
        ("search", Some(search)) => Command::Search(required(search, "QUERY")?.into()),
        ("show", Some(show)) => Command::Show(required(show, "ENTRY_ID")?.parse()?),
        ("finish", Some(finish)) => Command::Finish(required(finish, "ENTRY_ID")?.parse()?),
        _ => Command::Nil,
    };

    Ok(command)
}

fn run() -> Result<()> {
    let matches = app().get_matches();
    let command = parse_command(&matches)?;

    if command == Command::Nil {
        println!("{}", matches.usage());
        return Ok(());
    }

    let path = config::data_file(file_flag(&matches))?;
    let mut shelf = Shelf::open(JsonFile::new(path))?;

    if let Some(e) = shelf.recovered_from() {
        eprintln!("warning: {}", e);
        eprintln!("warning: showing an empty list; the next change will overwrite that file");
    }

    let msg = exec_command(&mut shelf, command)?;

    println!("{}", msg);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);

        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }

        if e.kind().is_validation() {
            eprintln!("nothing was added");
        }

        process::exit(1);
    }
}
