//! Сканер полей BAI2: курсор по входной строке и выделение очередного поля.
//!
//! Поле заканчивается на ближайшем из трёх маркеров: `,` (разделитель
//! полей), `/` (терминатор записи), `\n` (конец физической строки).
//! Правила выбора повторяют реальные банковские выгрузки, в которых `/`
//! может отсутствовать.

use crate::error::{Bai2Error, Result};

/// Индекс разделителя очередного поля, либо None, если разделителей нет.
fn delimiter_index(data: &str) -> Option<usize> {
    let slash = data.find('/');
    let newline = data.find('\n');

    let comma = match data.find(',') {
        // Без запятой поле заканчивается на `/`, а без него — на переводе строки.
        None => return slash.or(newline),
        Some(comma) => comma,
    };

    // `/` раньше запятой — конец записи.
    if let Some(slash) = slash {
        if slash < comma {
            return Some(slash);
        }
    }

    // Перевод строки раньше запятой при полном отсутствии `/` в остатке:
    // запись терминирована переводом строки. При наличии `/` дальше по
    // буферу правило не действует и строка тянется до него.
    if slash.is_none() {
        if let Some(newline) = newline {
            if newline < comma {
                return Some(newline);
            }
        }
    }

    Some(comma)
}

/// Очередное поле и число байт до следующего поля (включая разделитель).
pub fn next_field(input: &str, start: usize) -> Result<(String, usize)> {
    let data = input.get(start..).unwrap_or("");
    if data.is_empty() {
        return Err(Bai2Error::Scan("not enough input"));
    }
    let idx = delimiter_index(data).ok_or(Bai2Error::Scan("no valid delimiter"))?;
    Ok((data[..idx].to_string(), idx + 1))
}

/// Целочисленный вариант: пустое поле читается как ноль.
pub fn next_field_as_int(input: &str, start: usize) -> Result<(i64, usize)> {
    let (field, advance) = next_field(input, start)?;
    if field.is_empty() {
        return Ok((0, advance));
    }
    let value = field
        .parse::<i64>()
        .map_err(|_| Bai2Error::Scan("invalid integer value"))?;
    Ok((value, advance))
}

/// Длина текущей физической записи вместе с терминатором: до первого `/`
/// включительно, иначе до первого перевода строки, иначе None (запись
/// закрывается концом входа).
pub fn record_size(input: &str) -> Option<usize> {
    if let Some(idx) = input.find('/') {
        return Some(idx + 1);
    }
    input.find('\n').map(|idx| idx + 1)
}
