use std::io::{self, IsTerminal, Write};

use anyhow::anyhow;
use unicode_width::UnicodeWidthStr;

use crate::config::Config;
use crate::task::Theme;
use crate::theme::ThemeSurface;
use crate::view::{ListBody, TaskListView, render_html};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    id: &'static str,
    done: &'static str,
    counter: &'static str,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                id: "33",
                done: "32",
                counter: "34",
            },
            Theme::Dark => Self {
                id: "93",
                done: "92",
                counter: "96",
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    ansi: bool,
    palette: Palette,
}

impl Renderer {
    pub fn new(cfg: &Config) -> anyhow::Result<Self> {
        let color_cfg = cfg.get("color").unwrap_or_else(|| "on".to_string());
        let color = match color_cfg.to_ascii_lowercase().as_str() {
            "on" | "yes" | "true" | "1" => true,
            "off" | "no" | "false" | "0" => false,
            other => return Err(anyhow!("invalid color setting: {other}")),
        };

        Ok(Self {
            ansi: color && io::stdout().is_terminal(),
            palette: Palette::for_theme(Theme::Light),
        })
    }

    pub fn plain() -> Self {
        Self {
            ansi: false,
            palette: Palette::for_theme(Theme::Light),
        }
    }

    #[tracing::instrument(skip(self, view))]
    pub fn print_list(&self, view: &TaskListView) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        self.write_list(&mut out, view)
    }

    #[tracing::instrument(skip(self, view))]
    pub fn print_html(&self, view: &TaskListView) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", render_html(view))?;
        Ok(())
    }

    pub fn write_list<W: Write>(&self, mut out: W, view: &TaskListView) -> anyhow::Result<()> {
        match &view.body {
            ListBody::Empty(empty) => {
                writeln!(out, "{} {}", empty.icon, empty.message)?;
            }
            ListBody::Rows(rows) => {
                let headers = vec!["ID".to_string(), "Done".to_string(), "Task".to_string()];
                let rows = rows
                    .iter()
                    .map(|row| {
                        let done = if row.completed {
                            self.paint("[x]", self.palette.done)
                        } else {
                            "[ ]".to_string()
                        };
                        vec![
                            self.paint(&row.id.to_string(), self.palette.id),
                            done,
                            row.text.clone(),
                        ]
                    })
                    .collect();
                write_table(&mut out, headers, rows)?;
            }
        }

        writeln!(
            out,
            "Active tasks: {}",
            self.paint(&view.counter_text(), self.palette.counter)
        )?;
        Ok(())
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl ThemeSurface for Renderer {
    fn apply(&mut self, theme: Theme) {
        self.palette = Palette::for_theme(theme);
    }
}

fn write_table<W: Write>(
    mut writer: W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }

    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    for idx in 0..column_count {
        write!(writer, "{:width$} ", headers[idx], width = widths[idx])?;
    }
    writeln!(writer)?;

    for width in &widths {
        write!(writer, "{:-<width$} ", "", width = *width)?;
    }
    writeln!(writer)?;

    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let visible_width = UnicodeWidthStr::width(strip_ansi(cell).as_str());
            let padding = widths[idx].saturating_sub(visible_width);
            write!(writer, "{}{} ", cell, " ".repeat(padding))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }

        if ch == '\x1b' {
            escaped = true;
            continue;
        }

        out.push(ch);
    }

    out
}
