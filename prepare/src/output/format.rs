/// отступ одного уровня вложенности
pub const INDENT: &str = "    ";

/// представить элементы массива строками по per_line элементов.
/// comment(i) - комментарий перед строкой, начинающейся с i-го элемента
pub fn format_rows<I, F>(items: I, per_line: usize, indent: &str, comment: F) -> String
where
    I: IntoIterator<Item = String>,
    F: Fn(usize) -> Option<String>,
{
    let mut output = String::new();

    for (i, item) in items.into_iter().enumerate() {
        match i % per_line == 0 {
            true => {
                if i != 0 {
                    output.push('\n');
                }

                output.push_str(indent);

                if let Some(comment) = comment(i) {
                    output.push_str(&format!("/* {} */ ", comment));
                }
            }
            false => output.push(' '),
        }

        output.push_str(&item);
        output.push(',');
    }

    if !output.is_empty() {
        output.push('\n');
    }

    output
}

/// беззнаковый тип для элемента stage1 заданного размера
pub fn unsigned_type(bytes: usize) -> &'static str
{
    match bytes {
        1 => "u8",
        2 => "u16",
        4 => "u32",
        _ => "u64",
    }
}
