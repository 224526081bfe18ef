use bai2lib::model::Bai2File;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bai2", version, about = "Разбор, валидация и печать файлов BAI2")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Разбор и валидация входного файла, краткая сводка
    Parse {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,
    },

    /// Канонический вывод BAI2 с переразбивкой длинных записей
    Print {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,

        /// Лимит длины физической строки (по умолчанию из заголовка файла)
        #[arg(long = "max-len")]
        max_len: Option<usize>,
    },

    /// Структурированное JSON-представление дерева
    Format {
        /// Входной файл (по умолчанию stdin)
        #[arg(short = 'i', long = "input")]
        input: Option<String>,

        /// Выходной файл (по умолчанию stdout)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}

// Коды завершения: 0 — успех, 1 — ошибка разбора, 2 — ошибка валидации,
// 3 — ошибка ввода/вывода.
const EXIT_PARSE: u8 = 1;
const EXIT_VALIDATE: u8 = 2;
const EXIT_IO: u8 = 3;

fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    run(Cli::parse())
}

fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Parse { input } => {
            let content = match read_input(input) {
                Ok(content) => content,
                Err(err) => return fail(err, EXIT_IO),
            };
            let file = match Bai2File::parse(&content) {
                Ok(file) => file,
                Err(err) => return fail(err, EXIT_PARSE),
            };
            if let Err(err) = file.validate() {
                return fail(err, EXIT_VALIDATE);
            }
            let accounts: usize = file.groups.iter().map(|g| g.accounts.len()).sum();
            let details: usize = file
                .groups
                .iter()
                .flat_map(|g| g.accounts.iter())
                .map(|a| a.details.len())
                .sum();
            println!(
                "BAI2 OK: {} -> {}, групп: {}, счетов: {}, транзакций: {}",
                file.sender,
                file.receiver,
                file.groups.len(),
                accounts,
                details
            );
            ExitCode::SUCCESS
        }

        Command::Print {
            input,
            output,
            max_len,
        } => {
            let content = match read_input(input) {
                Ok(content) => content,
                Err(err) => return fail(err, EXIT_IO),
            };
            let file = match Bai2File::parse(&content) {
                Ok(file) => file,
                Err(err) => return fail(err, EXIT_PARSE),
            };
            let rendered = file.render(max_len.or(file.physical_line_limit()));
            match write_output(output, &rendered) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => fail(err, EXIT_IO),
            }
        }

        Command::Format { input, output } => {
            let content = match read_input(input) {
                Ok(content) => content,
                Err(err) => return fail(err, EXIT_IO),
            };
            let file = match Bai2File::parse(&content) {
                Ok(file) => file,
                Err(err) => return fail(err, EXIT_PARSE),
            };
            let rendered = match serde_json::to_string_pretty(&file) {
                Ok(rendered) => rendered,
                Err(err) => return fail(err, EXIT_IO),
            };
            match write_output(output, &rendered) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => fail(err, EXIT_IO),
            }
        }
    }
}

fn read_input(path: Option<String>) -> io::Result<String> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let mut content = String::new();
    BufReader::new(reader).read_to_string(&mut content)?;
    tracing::debug!("прочитано {} байт", content.len());
    Ok(content)
}

fn write_output(path: Option<String>, data: &str) -> io::Result<()> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };
    writer.write_all(data.as_bytes())?;
    writer.flush()
}

fn fail(err: impl std::fmt::Display, code: u8) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(code)
}
