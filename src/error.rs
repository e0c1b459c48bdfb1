use std::io;
use thiserror::Error;

/// Result-тип для операций с таблицей каналов
pub type Result<T> = std::result::Result<T, ChannelMapError>;

/// Ошибки загрузки и вывода карты каналов
#[derive(Debug, Error)]
pub enum ChannelMapError {
	/// Не удалось открыть входной файл
	#[error("не удалось открыть файл '{path}': {source}")]
	SourceUnavailable {
		path: String,
		#[source]
		source: io::Error,
	},

	/// Ошибка ввода-вывода при чтении потока или выводе результата
	#[error("ошибка ввода-вывода: {0}")]
	Io(#[from] io::Error),

	/// Пара значений не разбирается как два числа
	#[error("некорректная запись во входных данных: токен '{token}'")]
	MalformedInput { token: String },

	/// Превышена объявленная ёмкость таблицы
	#[error("превышена ёмкость таблицы: более {capacity} записей")]
	CapacityExceeded { capacity: usize },
}
