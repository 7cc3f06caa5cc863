use std::io;

use crate::entry::GlyphEntry;

const TABLE_HEADER: &str =
    "// Character mapping table - sorted by Unicode value for binary search";
const TABLE_OPEN: &str = "static const char_mapping_t char_map[] = {";
const TABLE_CLOSE: &str = "};";
const SIZE_DEFINE: &str = "#define CHAR_MAP_SIZE";

/// Orders entries by code point. Equal code points keep their font order,
/// so the firmware's binary search always lands on the earliest glyph.
pub fn sort_entries(entries: &[GlyphEntry]) -> Vec<&GlyphEntry> {
    let mut sorted = entries.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|entry| (entry.codepoint(), entry.font_index()));
    sorted
}

pub fn render_comment(c: char) -> String {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        c.to_string()
    } else if code <= 0x7F {
        format!("\\x{:02x}", code)
    } else if is_renderable(c) {
        c.to_string()
    } else {
        format!("U+{:04X}", code)
    }
}

// C1 controls would end up as raw bytes inside a line comment.
fn is_renderable(c: char) -> bool {
    !c.is_control()
}

pub fn render_row(entry: &GlyphEntry) -> String {
    format!(
        "    {{0x{:04X}, {:3}}},  // {}",
        entry.code(),
        entry.font_index(),
        render_comment(entry.codepoint())
    )
}

/// Renders the complete `char_map[]` definition followed by
/// `CHAR_MAP_SIZE`. The result has no trailing newline.
pub fn generate_table(entries: &[GlyphEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 5);
    lines.push(TABLE_HEADER.to_owned());
    lines.push(TABLE_OPEN.to_owned());
    lines.extend(sort_entries(entries).into_iter().map(render_row));
    lines.push(TABLE_CLOSE.to_owned());
    lines.push(String::new());
    lines.push(format!("{} {}", SIZE_DEFINE, entries.len()));
    lines.join("\n")
}

pub fn write_table<W: io::Write>(entries: &[GlyphEntry], writer: &mut W) -> io::Result<()> {
    writer.write_all(generate_table(entries).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(table: &str) -> Vec<&str> {
        table
            .lines()
            .filter(|line| line.starts_with("    {"))
            .collect()
    }

    #[test]
    fn comments() {
        assert_eq!(" ", render_comment(' '));
        assert_eq!("~", render_comment('~'));
        assert_eq!("\\x0a", render_comment('\n'));
        assert_eq!("\\x7f", render_comment('\u{7F}'));
        assert_eq!("\u{3042}", render_comment('\u{3042}'));
        assert_eq!("U+0085", render_comment('\u{85}'));
    }

    #[test]
    fn row_format() {
        assert_eq!(
            "    {0x0041,  33},  // A",
            render_row(&GlyphEntry::new(33, "A", 'A'))
        );
        assert_eq!(
            "    {0x3042, 140},  // \u{3042}",
            render_row(&GlyphEntry::new(140, "kanji", '\u{3042}'))
        );
        assert_eq!(
            "    {0x1F600, 1000},  // \u{1F600}",
            render_row(&GlyphEntry::new(1000, "emoji", '\u{1F600}'))
        );
    }

    #[test]
    fn empty_table() {
        assert_eq!(
            "// Character mapping table - sorted by Unicode value for binary search\n\
             static const char_mapping_t char_map[] = {\n\
             };\n\
             \n\
             #define CHAR_MAP_SIZE 0",
            generate_table(&[])
        );
    }

    #[test]
    fn sorted_by_codepoint() {
        let entries = vec![
            GlyphEntry::new(0, "kanji", '\u{4E00}'),
            GlyphEntry::new(1, "sp", ' '),
            GlyphEntry::new(2, "hiragana", '\u{3042}'),
            GlyphEntry::new(3, "A", 'A'),
        ];

        let table = generate_table(&entries);
        assert_eq!(
            vec![
                "    {0x0020,   1},  //  ",
                "    {0x0041,   3},  // A",
                "    {0x3042,   2},  // \u{3042}",
                "    {0x4E00,   0},  // \u{4E00}",
            ],
            rows(&table)
        );
        assert!(table.ends_with("};\n\n#define CHAR_MAP_SIZE 4"));
    }

    #[test]
    fn ties_keep_font_order() {
        let entries = (0..10)
            .filter(|index| *index != 5)
            .map(|index| match index {
                3 | 7 => GlyphEntry::new(index, "A", 'A'),
                _ => GlyphEntry::new(index, "num", '#'),
            })
            .collect::<Vec<_>>();

        let sorted = sort_entries(&entries)
            .into_iter()
            .map(GlyphEntry::font_index)
            .collect::<Vec<_>>();
        assert_eq!(vec![0, 1, 2, 4, 6, 8, 9, 3, 7], sorted);
    }

    #[test]
    fn size_matches_rows() {
        let entries = vec![
            GlyphEntry::new(0, "a", 'a'),
            GlyphEntry::new(1, "a", 'a'),
            GlyphEntry::new(2, "kanji", '\u{65E5}'),
        ];

        let table = generate_table(&entries);
        assert_eq!(3, rows(&table).len());
        assert!(table.ends_with("#define CHAR_MAP_SIZE 3"));
    }

    #[test]
    fn writes_table() {
        let entries = vec![GlyphEntry::new(0, "tilde", '~')];
        let mut buf = Vec::new();
        write_table(&entries, &mut buf).unwrap();
        assert_eq!(generate_table(&entries), String::from_utf8(buf).unwrap());
    }
}
