use endian_layout::layout::{parse_layout, Layout};
use endian_layout::record::{TestRecord, RECORD_FIELDS, RECORD_FIELD_NAMES, RECORD_LEN};
use endian_layout::ByteOrder;
use std::process;

const USAGE: &str = "\
Usage: layoutdump [-o big|little|both] [-w <output.bin>] [-l <types>] [-v]

Print the fixed record layout and hex dumps of the encoded boundary record.

Options:
  -o, --order <order>    Byte order to dump (default: both)
  -w, --write <file>     Write the encoded bytes to a file (needs a single order)
  -l, --layout <types>   Print the layout of a comma-separated type list instead
                         (cannot be combined with -o or -w)
  -v, --verbose          Also print decoded field values";

fn format_layout(layout: &Layout, names: Option<&[&str]>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Layout: {} fields, {} bytes\n",
        layout.len(),
        layout.total_len()
    ));
    out.push_str("  Field  Type  Width  Offset\n");
    for (i, (ft, offset)) in layout.iter().enumerate() {
        let name = match names {
            Some(names) => names[i].to_string(),
            None => format!("#{}", i),
        };
        out.push_str(&format!(
            "  {:<5}  {:<4}  {:>5}  {:>6}\n",
            name,
            ft,
            ft.byte_width(),
            offset
        ));
    }
    out
}

fn format_hex(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in bytes.chunks(16).enumerate() {
        out.push_str(&format!("  {:04x}:", row * 16));
        for b in chunk {
            out.push_str(&format!(" {:02x}", b));
        }
        out.push('\n');
    }
    out
}

fn format_record(record: &TestRecord, order: ByteOrder, verbose: bool) -> String {
    let bytes = record.encode(order);
    let mut out = String::new();
    out.push_str(&format!("{}-endian ({} bytes):\n", order, bytes.len()));
    out.push_str(&format_hex(&bytes));
    if verbose {
        // decode from the bytes so the listing reflects what was written
        match TestRecord::decode(&bytes, order) {
            Ok(decoded) => {
                for (name, value) in RECORD_FIELD_NAMES.iter().zip(decoded.values()) {
                    out.push_str(&format!("    {} = {}\n", name, value));
                }
            }
            Err(e) => out.push_str(&format!("    decode failed: {}\n", e)),
        }
    }
    out
}

fn run(args: &[String]) -> Result<String, String> {
    let mut verbose = false;
    let mut orders: Vec<ByteOrder> = ByteOrder::ALL.to_vec();
    let mut write_path: Option<&str> = None;
    let mut layout_spec: Option<&str> = None;
    let mut order_given = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-o" | "--order" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}\n\n{}", arg, USAGE))?;
                orders = if value == "both" {
                    ByteOrder::ALL.to_vec()
                } else {
                    let order = value
                        .parse::<ByteOrder>()
                        .map_err(|e| format!("Invalid order '{}': {}", value, e))?;
                    vec![order]
                };
                order_given = true;
            }
            "-w" | "--write" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}\n\n{}", arg, USAGE))?;
                write_path = Some(value.as_str());
            }
            "-l" | "--layout" => {
                let value = iter
                    .next()
                    .ok_or_else(|| format!("Missing value for {}\n\n{}", arg, USAGE))?;
                layout_spec = Some(value.as_str());
            }
            "-h" | "--help" => return Ok(format!("{}\n", USAGE)),
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            other => return Err(format!("Unexpected argument: {}\n\n{}", other, USAGE)),
        }
    }

    if let Some(spec) = layout_spec {
        if write_path.is_some() || order_given {
            return Err(format!(
                "-l cannot be combined with -w or -o\n\n{}",
                USAGE
            ));
        }
        let layout =
            parse_layout(spec).map_err(|e| format!("Invalid layout '{}': {}", spec, e))?;
        return Ok(format_layout(&layout, None));
    }

    let layout = Layout::new(&RECORD_FIELDS).map_err(|e| e.to_string())?;
    let mut out = format_layout(&layout, Some(&RECORD_FIELD_NAMES[..]));
    for &order in &orders {
        out.push('\n');
        out.push_str(&format_record(&TestRecord::EXTREMES, order, verbose));
    }

    if let Some(path) = write_path {
        let &[order] = orders.as_slice() else {
            return Err("Writing requires a single byte order (-o big or -o little)".to_string());
        };
        let bytes = TestRecord::EXTREMES.encode(order);
        std::fs::write(path, &bytes).map_err(|e| format!("Error writing '{}': {}", path, e))?;
        out.push_str(&format!(
            "\nWrote {} bytes ({}-endian) to {}\n",
            RECORD_LEN, order, path
        ));
    }

    Ok(out)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(output) => print!("{}", output),
        Err(msg) => {
            eprintln!("{}", msg);
            process::exit(1);
        }
    }
}
