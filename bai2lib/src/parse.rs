//! Сборка дерева BAI2 из плоского потока записей.
//!
//! Курсор идёт по входу, диспетчеризация — по двузначному коду записи:
//! 01/02/03/16 открывают уровень, 49/98/99 закрывают. Продолжения 88
//! целиком потребляются кодеками записей и на этом уровне не встречаются.
//! Итоги и счётчики из трейлеров сохраняются как заявлены; их сверяет
//! валидатор, а не разбор.

use std::io::BufRead;

use crate::error::{Bai2Error, Result};
use crate::model::{Account, Bai2File, Group};
use crate::records::{account, detail, file, group, reader};
use crate::traits::ReadFormat;

/// Формат BAI2 для унифицированных трэйтов чтения/записи.
pub struct Bai2;

impl ReadFormat for Bai2 {
    fn read<R: BufRead>(mut r: R) -> Result<Bai2File> {
        let mut content = String::new();
        r.read_to_string(&mut content)?;
        Bai2File::parse(&content)
    }
}

impl Bai2File {
    /// Разбирает байтовый поток BAI2 в дерево файла.
    pub fn parse(input: &str) -> Result<Bai2File> {
        let mut pos = 0usize;
        let mut open_file: Option<Bai2File> = None;
        let mut open_group: Option<Group> = None;
        let mut open_account: Option<Account> = None;
        let mut closed = false;

        while pos < input.len() {
            // пустые физические строки между записями
            match input.as_bytes()[pos] {
                b'\n' | b'\r' => {
                    pos += 1;
                    continue;
                }
                _ => {}
            }
            if closed {
                return Err(structure(pos, "records after file trailer"));
            }
            let code = match input.get(pos..pos + 2) {
                Some(code) => code,
                None => return Err(structure(pos, "truncated record code")),
            };
            match code {
                file::HEADER_CODE => {
                    if open_file.is_some() {
                        return Err(structure(pos, "duplicate file header"));
                    }
                    let (parsed, size) = file::parse_header(input, pos).map_err(|e| at(pos, e))?;
                    open_file = Some(parsed);
                    pos += size;
                }
                group::HEADER_CODE => {
                    if open_file.is_none() {
                        return Err(structure(pos, "group header before file header"));
                    }
                    if open_group.is_some() {
                        return Err(structure(pos, "group header inside an open group"));
                    }
                    let (parsed, size) = group::parse_header(input, pos).map_err(|e| at(pos, e))?;
                    open_group = Some(parsed);
                    pos += size;
                }
                account::IDENTIFIER_CODE => {
                    if open_group.is_none() {
                        return Err(structure(pos, "account identifier outside a group"));
                    }
                    if open_account.is_some() {
                        return Err(structure(pos, "account identifier inside an open account"));
                    }
                    let (parsed, size) =
                        account::parse_identifier(input, pos).map_err(|e| at(pos, e))?;
                    open_account = Some(parsed);
                    pos += size;
                }
                detail::CODE => match open_account.as_mut() {
                    Some(current) => {
                        let (parsed, size) = detail::parse(input, pos).map_err(|e| at(pos, e))?;
                        current.details.push(parsed);
                        pos += size;
                    }
                    None => return Err(structure(pos, "transaction detail outside an account")),
                },
                account::TRAILER_CODE => {
                    let mut current = match open_account.take() {
                        Some(current) => current,
                        None => {
                            return Err(structure(pos, "account trailer without an open account"))
                        }
                    };
                    let size =
                        account::parse_trailer(input, pos, &mut current).map_err(|e| at(pos, e))?;
                    match open_group.as_mut() {
                        Some(parent) => parent.accounts.push(current),
                        None => return Err(structure(pos, "account trailer outside a group")),
                    }
                    pos += size;
                }
                group::TRAILER_CODE => {
                    if open_account.is_some() {
                        return Err(structure(pos, "group trailer inside an open account"));
                    }
                    let mut current = match open_group.take() {
                        Some(current) => current,
                        None => return Err(structure(pos, "group trailer without an open group")),
                    };
                    let size =
                        group::parse_trailer(input, pos, &mut current).map_err(|e| at(pos, e))?;
                    match open_file.as_mut() {
                        Some(parent) => parent.groups.push(current),
                        None => return Err(structure(pos, "group trailer before file header")),
                    }
                    pos += size;
                }
                file::TRAILER_CODE => {
                    if open_group.is_some() || open_account.is_some() {
                        return Err(structure(pos, "file trailer inside an open scope"));
                    }
                    match open_file.as_mut() {
                        Some(current) => {
                            let size =
                                file::parse_trailer(input, pos, current).map_err(|e| at(pos, e))?;
                            pos += size;
                            closed = true;
                        }
                        None => return Err(structure(pos, "file trailer without file header")),
                    }
                }
                reader::CONTINUATION => {
                    return Err(structure(pos, "continuation without a preceding record"));
                }
                other => {
                    return Err(structure(pos, format!("unknown record code {other}")));
                }
            }
        }

        match open_file {
            Some(parsed) if closed => Ok(parsed),
            Some(_) => Err(structure(input.len(), "missing file trailer")),
            None => Err(structure(0, "empty input")),
        }
    }
}

fn structure(offset: usize, message: impl Into<String>) -> Bai2Error {
    Bai2Error::Structure {
        offset,
        message: message.into(),
    }
}

fn at(offset: usize, source: Bai2Error) -> Bai2Error {
    Bai2Error::Record {
        offset,
        source: Box::new(source),
    }
}
