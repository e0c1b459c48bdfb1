use clap::Parser;
use colored::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

mod channel_table;
mod error;


use crate::channel_table::{ChannelTable, DEFAULT_CAPACITY};
use crate::error::{ChannelMapError, Result};

/// Сортировка карты каналов по имени канала
#[derive(Parser, Debug)]
#[command(name = "sort_channels", version, about = "Сортировка карты каналов по имени канала")]
struct Args {
    /// Путь к файлу карты каналов (пары "канал имя", разделённые пробелами)
    path: PathBuf,

    /// Максимальное количество записей в таблице
    #[arg(long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn run(args: &Args) -> Result<()> {
    // Открытие входного файла
    let file = match File::open(&args.path) {
        Ok(f) => f,
        Err(e) => {
            return Err(ChannelMapError::SourceUnavailable {
                path: args.path.display().to_string(),
                source: e,
            });
        }
    };

    // Загрузка таблицы, сортировка по имени и вывод в stdout
    let table = ChannelTable::load(BufReader::new(file), args.capacity)?;
    let indices = table.sorted_indices();
    table.emit(&indices, io::stdout().lock())?;

    Ok(())
}

fn main() {
    // Включить поддержку ANSI для Windows 10+
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{}", format!("Ошибка: {}", e).red());
        process::exit(1);
    }
}
