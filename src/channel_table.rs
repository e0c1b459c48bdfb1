use std::io::{self, Read, Write};

use crate::error::{ChannelMapError, Result};

/// Ёмкость таблицы по умолчанию (144 канала в карте из схемотехники)
pub const DEFAULT_CAPACITY: usize = 144;

/// Одна запись карты каналов: физический номер канала и числовое имя
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
	pub channel: f64,
	pub name: f64,
}

/// Таблица каналов, загруженная из карты
#[derive(Debug)]
pub struct ChannelTable {
	records: Vec<Record>,
	capacity: usize,
}

impl ChannelTable {
	/// Читает пары (канал, имя) из потока до конца данных
	pub fn load<R: Read>(mut reader: R, capacity: usize) -> Result<ChannelTable> {
		let mut contents = String::new();
		reader.read_to_string(&mut contents)?;

		let mut records = Vec::new();
		let mut tokens = contents.split_whitespace();

		// Запись добавляется только после успешного разбора обеих величин
		while let Some(first) = tokens.next() {
			let channel = parse_value(first)?;

			// Непарный токен в конце файла — неполная запись
			let second = match tokens.next() {
				Some(t) => t,
				None => {
					return Err(ChannelMapError::MalformedInput {
						token: first.to_string(),
					});
				}
			};
			let name = parse_value(second)?;

			if records.len() >= capacity {
				return Err(ChannelMapError::CapacityExceeded { capacity });
			}
			records.push(Record { channel, name });
		}

		Ok(ChannelTable { records, capacity })
	}

	/// Возвращает перестановку индексов, при которой имена каналов не убывают
	pub fn sorted_indices(&self) -> Vec<usize> {
		let mut indices: Vec<usize> = (0..self.records.len()).collect();
		indices.sort_by(|&a, &b| self.records[a].name.total_cmp(&self.records[b].name));
		indices
	}

	/// Выводит записи в порядке перестановки, по одной паре на строку
	pub fn emit<W: Write>(&self, indices: &[usize], mut writer: W) -> io::Result<()> {
		for &i in indices {
			let rec = &self.records[i];
			writeln!(writer, "{} {}", rec.channel, rec.name)?;
		}
		Ok(())
	}

	/// Количество загруженных записей
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Пустая ли таблица
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	/// Объявленная ёмкость таблицы
	pub fn capacity(&self) -> usize {
		self.capacity
	}
}

/// Разбирает токен как число с плавающей точкой
fn parse_value(token: &str) -> Result<f64> {
	match token.parse::<f64>() {
		Ok(v) => Ok(v),
		Err(_) => Err(ChannelMapError::MalformedInput {
			token: token.to_string(),
		}),
	}
}
