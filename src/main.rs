use clap::Parser;
use flier::application::{
    init, DayService, EditorSession, ExportService, FieldService, PanelService, WeekService,
};
use flier::cli::output::format_flier_summary;
use flier::cli::{
    Cli, Commands, DayCommands, EventCommands, GuestCommands, HashtagCommands, QuoteCommands,
};
use flier::domain::GuestShape;
use flier::error::{FlierError, Result};
use flier::infrastructure::{
    DocumentRepository, FileArtifactExporter, FileSystemRepository, HtmlRenderer,
};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => init::init(&path),

        Commands::Show => {
            let repo = FileSystemRepository::discover()?;
            print!("{}", format_flier_summary(&repo.load()?));
            Ok(())
        }

        Commands::Get { key } => {
            let service = FieldService::new(FileSystemRepository::discover()?);
            println!("{}", service.get(&key)?);
            Ok(())
        }

        Commands::Set { key, value } => {
            let service = FieldService::new(FileSystemRepository::discover()?);
            service.set(&key, &value)?;
            println!("Set {} = {}", key, value);
            Ok(())
        }

        Commands::Week { date } => {
            let service = WeekService::new(FileSystemRepository::discover()?);
            let start = service.select(&date)?;
            println!("Week starts {}", start.format("%Y-%m-%d"));
            Ok(())
        }

        Commands::Day { command } => run_day(command),
        Commands::Event { command } => run_event(command),
        Commands::Hashtag { command } => run_hashtag(command),
        Commands::Quote { command } => run_quote(command),
        Commands::Guest { command } => run_guest(command),

        Commands::Progress { current, goal } => {
            let service = FieldService::new(FileSystemRepository::discover()?);
            let label = service.set_progress(current.as_deref(), goal.as_deref())?;
            println!("Progress: {}", label);
            Ok(())
        }

        Commands::Reset => {
            let repo = FileSystemRepository::discover()?;
            let mut session = EditorSession::new(repo.load()?);
            session.reset();
            repo.save(session.config())?;
            println!("Restored the default flyer");
            Ok(())
        }

        Commands::Export { output, dark } => {
            let service = ExportService::new(
                FileSystemRepository::discover()?,
                HtmlRenderer,
                FileArtifactExporter,
            );
            service.execute(&output, dark)?;
            println!("Exported {}", output.display());
            Ok(())
        }
    }
}

fn run_day(command: DayCommands) -> Result<()> {
    let service = DayService::new(FileSystemRepository::discover()?);

    match command {
        DayCommands::Color { day, color, clear } => match (color, clear) {
            (Some(value), false) => {
                let name = service.set_color(&day, Some(&value))?;
                println!("Set {} header color to {}", name, value);
                Ok(())
            }
            (None, true) => {
                let name = service.set_color(&day, None)?;
                println!("Cleared {} header color override", name);
                Ok(())
            }
            _ => Err(FlierError::Config(
                "Provide a color or --clear, not both".to_string(),
            )),
        },
    }
}

fn run_event(command: EventCommands) -> Result<()> {
    let service = DayService::new(FileSystemRepository::discover()?);

    match command {
        EventCommands::Add {
            day,
            title,
            time,
            optional,
        } => {
            let name = service.add_event(&day, &title, &time, optional)?;
            println!("Added '{}' to {}", title, name);
            Ok(())
        }
        EventCommands::Remove { day, position } => {
            let name = service.remove_event(&day, position)?;
            println!("Removed event {} from {}", position, name);
            Ok(())
        }
        EventCommands::Optional { day, position, off } => {
            let name = service.set_event_optional(&day, position, !off)?;
            if off {
                println!("Event {} on {} is no longer optional", position, name);
            } else {
                println!("Event {} on {} is now optional", position, name);
            }
            Ok(())
        }
    }
}

fn run_hashtag(command: HashtagCommands) -> Result<()> {
    let service = PanelService::new(FileSystemRepository::discover()?);

    match command {
        HashtagCommands::Add { text } => {
            let added = service.add_hashtag(&text)?;
            match added.color() {
                Some(color) => println!("Added {} ({})", added.text(), color),
                None => println!("Added {}", added.text()),
            }
            Ok(())
        }
        HashtagCommands::Remove { position } => {
            service.remove_hashtag(position)?;
            println!("Removed hashtag {}", position);
            Ok(())
        }
    }
}

fn run_quote(command: QuoteCommands) -> Result<()> {
    let service = PanelService::new(FileSystemRepository::discover()?);

    match command {
        QuoteCommands::Add { text } => {
            service.add_quote(&text)?;
            println!("Added quote");
            Ok(())
        }
        QuoteCommands::Remove { position } => {
            service.remove_quote(position)?;
            println!("Removed quote {}", position);
            Ok(())
        }
    }
}

fn run_guest(command: GuestCommands) -> Result<()> {
    let service = DayService::new(FileSystemRepository::discover()?);

    match command {
        GuestCommands::Set {
            day,
            text,
            shape,
            color,
        } => {
            let shape = GuestShape::from_str(&shape).map_err(FlierError::Config)?;
            let name = service.set_guest(&day, &text, shape, color.as_deref())?;
            println!("Set special guest on {}", name);
            Ok(())
        }
        GuestCommands::Clear { day } => {
            let name = service.clear_guest(&day)?;
            println!("Cleared special guest on {}", name);
            Ok(())
        }
    }
}
