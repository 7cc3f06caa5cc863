use std::collections::BTreeMap;
use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

static DATA_FILE: &str = "data/ascii-names.txt";

fn main() {
    println!("cargo:rerun-if-changed={}", DATA_FILE);

    let mut map = BTreeMap::new();

    let lines = BufReader::new(File::open(DATA_FILE).unwrap()).lines();
    for line_result in lines {
        let line = line_result.unwrap();
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        let parts = line.split(';').map(str::trim).collect::<Vec<_>>();
        assert_eq!(parts.len(), 2, "malformed name table line: {:?}", line);

        let c32 = u32::from_str_radix(parts[1], 16).unwrap();
        assert!(
            (0x20..=0x7E).contains(&c32),
            "{} is outside the printable ASCII range",
            parts[0]
        );
        if let Some(c) = std::char::from_u32(c32) {
            let previous = map.insert(parts[0].to_owned(), format!("'\\u{{{:x}}}'", c as u32));
            assert!(previous.is_none(), "duplicate name {:?}", parts[0]);
        }
    }

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join("codegen.rs");
    let mut file = BufWriter::new(File::create(&path).unwrap());
    write!(
        &mut file,
        "static NAME_MAP: phf::Map<&'static str, char> = "
    )
    .unwrap();
    let mut map_builder = phf_codegen::Map::new();
    for (key, value) in map {
        map_builder.entry(key, &value);
    }
    map_builder.build(&mut file).unwrap();
    write!(&mut file, ";\n").unwrap();
}
