//! Config field documentation, used by `reccli config show` to annotate the
//! TOML output with inline comments.

use std::collections::HashMap;

/// Documentation for a config section.
pub struct SectionDoc {
    /// TOML section name (e.g., "export")
    pub name: &'static str,
    /// Human-readable description of the section
    pub description: &'static str,
    /// Fields in this section
    pub fields: &'static [FieldDoc],
}

/// Documentation for a config field.
pub struct FieldDoc {
    /// Field name as it appears in TOML
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
}

/// Config sections in canonical display order.
pub const CONFIG_SECTIONS: &[SectionDoc] = &[
    SectionDoc {
        name: "export",
        description: "Export defaults",
        fields: &[
            FieldDoc {
                name: "default_format",
                description: "Format used when --format and the output extension are absent (txt, md, json, html, cast)",
            },
            FieldDoc {
                name: "output_directory",
                description: "Directory for exports written without --output",
            },
        ],
    },
    SectionDoc {
        name: "extraction",
        description: "Transcript extraction settings",
        fields: &[
            FieldDoc {
                name: "use_converter",
                description: "Try `<converter> convert -f raw` before parsing event logs directly",
            },
            FieldDoc {
                name: "converter",
                description: "Converter executable (asciinema 3.x)",
            },
            FieldDoc {
                name: "converter_timeout_secs",
                description: "Seconds to wait for the converter before falling back",
            },
        ],
    },
];

/// Annotate a serialized TOML config string with inline documentation comments.
///
/// Inserts `# description` comments above each known field and section.
pub fn annotate_config(toml_str: &str) -> String {
    let mut fields: HashMap<(&str, &str), &str> = HashMap::new();
    let mut sections: HashMap<&str, &str> = HashMap::new();
    for section in CONFIG_SECTIONS {
        sections.insert(section.name, section.description);
        for field in section.fields {
            fields.insert((section.name, field.name), field.description);
        }
    }

    let mut result = String::new();
    let mut current_section = String::new();

    for line in toml_str.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('[') && !trimmed.starts_with("[[") {
            let name = trimmed
                .trim_start_matches('[')
                .split(']')
                .next()
                .unwrap_or("")
                .trim();
            current_section = name.to_string();
            if let Some(desc) = sections.get(name) {
                result.push_str(&format!("# {}\n", desc));
            }
            result.push_str(line);
            result.push('\n');
            continue;
        }

        if let Some((before_eq, _)) = trimmed.split_once('=') {
            let key = before_eq.trim();
            if let Some(desc) = fields.get(&(current_section.as_str(), key)) {
                result.push_str(&format!("# {}\n", desc));
            }
        }

        result.push_str(line);
        result.push('\n');
    }

    result
}
