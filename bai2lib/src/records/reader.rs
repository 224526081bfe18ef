//! Чтение полей одной логической записи: заголовочная строка плюс
//! продолжения `88`, чьи поля вливаются в общий поток полей родителя.

use rust_decimal::Decimal;

use crate::error::{Bai2Error, Result};
use crate::scan;

/// Код записи-продолжения.
pub(crate) const CONTINUATION: &str = "88";

pub(crate) struct RecordReader<'a> {
    input: &'a str,
    record: &'static str,
    start: usize,
    pos: usize,
    done: bool,
}

impl<'a> RecordReader<'a> {
    pub(crate) fn new(input: &'a str, start: usize, record: &'static str) -> Result<Self> {
        // Короче "NN/" запись не бывает; запись без терминатора
        // закрывается концом входа.
        let rest = input.get(start..).unwrap_or("");
        let size = scan::record_size(rest);
        if rest.len() < 3 || matches!(size, Some(size) if size < 3) {
            return Err(Bai2Error::Field {
                record,
                field: "RecordCode",
            });
        }
        Ok(RecordReader {
            input,
            record,
            start,
            pos: start,
            done: false,
        })
    }

    /// Очередное поле записи; через границы физических строк дочитывает
    /// поля из продолжений 88.
    pub(crate) fn field(&mut self, field: &'static str) -> Result<String> {
        if self.done {
            return Err(self.err(field));
        }

        // Хвост без единого разделителя: запись закрывается концом входа.
        let rest = &self.input[self.pos..];
        if !rest.is_empty() && !rest.contains(',') && !rest.contains('/') && !rest.contains('\n') {
            self.pos = self.input.len();
            self.done = true;
            return Ok(rest.to_string());
        }

        let field_start = self.pos;
        let (mut value, advance) =
            scan::next_field(self.input, self.pos).map_err(|_| self.err(field))?;
        self.pos += advance;

        match self.input.as_bytes()[self.pos - 1] {
            b'/' => {
                // После терминатора записи допустим только перевод строки
                // или конец входа; иначе `/` стоит внутри поля.
                match self.input.as_bytes().get(self.pos).copied() {
                    None | Some(b'\n') | Some(b'\r') => {}
                    Some(_) => return Err(self.err(field)),
                }
                self.continue_or_close();
            }
            b'\n' => {
                if value.ends_with('\r') {
                    value.pop();
                }
                self.continue_or_close();
            }
            _ => {}
        }

        // Поле, склеенное через перевод строки: либо это шов продолжения
        // 88 (вырезаем), либо со следующей строки начинается новая запись
        // и поле заканчивается на переводе строки.
        if let Some(cut) = value.find('\n') {
            let mut head = value[..cut].to_string();
            if head.ends_with('\r') {
                head.pop();
            }
            if &value[cut + 1..] == CONTINUATION {
                value = head;
            } else {
                self.pos = field_start + cut + 1;
                self.done = true;
                value = head;
            }
        }
        Ok(value)
    }

    /// Необязательное хвостовое поле: None, если запись уже закончилась.
    pub(crate) fn optional_field(&mut self, field: &'static str) -> Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        self.field(field).map(Some)
    }

    /// Целое поле; пустое читается как ноль.
    pub(crate) fn int_field(&mut self, field: &'static str) -> Result<i64> {
        let value = self.field(field)?;
        if value.is_empty() {
            return Ok(0);
        }
        value.parse::<i64>().map_err(|_| self.err(field))
    }

    /// Целое либо None для пустого или отсутствующего поля.
    pub(crate) fn optional_int_field(&mut self, field: &'static str) -> Result<Option<i64>> {
        match self.optional_field(field)? {
            None => Ok(None),
            Some(value) if value.is_empty() => Ok(None),
            Some(value) => value.parse::<i64>().map(Some).map_err(|_| self.err(field)),
        }
    }

    /// Денежное поле числом; пустое читается как ноль.
    pub(crate) fn decimal_field(&mut self, field: &'static str) -> Result<Decimal> {
        let value = self.field(field)?;
        if value.is_empty() {
            return Ok(Decimal::ZERO);
        }
        value.parse::<Decimal>().map_err(|_| self.err(field))
    }

    /// Проверяет код записи в начале потока полей.
    pub(crate) fn expect_code(&mut self, code: &str) -> Result<()> {
        if self.field("RecordCode")? != code {
            return Err(self.err("RecordCode"));
        }
        Ok(())
    }

    /// Запись вместе с продолжениями прочитана до конца.
    pub(crate) fn ended(&self) -> bool {
        self.done
    }

    /// Дочитывает и отбрасывает остаток записи: нераспознанные поля
    /// произвольных продолжений (`CREF: ...` и подобные) не сохраняются.
    pub(crate) fn discard_rest(&mut self, field: &'static str) -> Result<()> {
        while !self.done {
            self.field(field)?;
        }
        Ok(())
    }

    /// Байт потреблено от начала записи.
    pub(crate) fn consumed(&self) -> usize {
        self.pos - self.start
    }

    pub(crate) fn err(&self, field: &'static str) -> Bai2Error {
        Bai2Error::Field {
            record: self.record,
            field,
        }
    }

    pub(crate) fn invalid(&self, field: &'static str) -> Bai2Error {
        Bai2Error::Invalid {
            record: self.record,
            field,
        }
    }

    /// На границе физической строки решает, тянется ли запись в
    /// продолжение 88 или закрывается.
    fn continue_or_close(&mut self) {
        let bytes = self.input.as_bytes();
        let mut next = self.pos;
        if bytes.get(next) == Some(&b'\r') {
            next += 1;
        }
        if bytes.get(next) == Some(&b'\n') {
            next += 1;
        }
        if self.input[next..].starts_with("88,") {
            self.pos = next + 3;
        } else {
            self.done = true;
        }
    }
}
