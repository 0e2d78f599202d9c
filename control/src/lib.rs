use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::PathBuf,
};

use thiserror::Error;
use tracing::info;

/// Errors raised while reading an `in.ctrl` file.
#[derive(Error, Debug)]
pub enum ControlError {
    #[error("I/O error at path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line_no}: expected 'key = value', found '{line}'")]
    MalformedLine { line_no: usize, line: String },

    #[error("line {line_no}: invalid value '{value}' for parameter '{key}'")]
    InvalidValue {
        line_no: usize,
        key: String,
        value: String,
    },

    #[error("line {line_no}: unknown parameter '{key}'")]
    UnknownParameter { line_no: usize, key: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    verbosity: String,
    spin_scheme: String, // nonspin, spin
    xc_scheme: String,   // svwn, lda-pz
    rho_policy: String,  // reject, clamp
    xc_chunk_size: usize,
    xc_parallel: bool,
}

impl Default for Control {
    fn default() -> Self {
        Control {
            verbosity: "high".to_string(),
            spin_scheme: "nonspin".to_string(),
            xc_scheme: "svwn".to_string(),
            rho_policy: "reject".to_string(),
            xc_chunk_size: 1024,
            xc_parallel: false,
        }
    }
}

impl Control {
    pub fn new() -> Control {
        Control::default()
    }

    pub fn is_spin(&self) -> bool {
        "spin" == self.get_spin_scheme()
    }

    pub fn get_verbosity(&self) -> &str {
        &self.verbosity
    }

    pub fn get_spin_scheme(&self) -> &str {
        &self.spin_scheme
    }

    pub fn get_xc_scheme(&self) -> &str {
        &self.xc_scheme
    }

    pub fn get_rho_policy(&self) -> &str {
        &self.rho_policy
    }

    pub fn get_xc_chunk_size(&self) -> usize {
        self.xc_chunk_size
    }

    pub fn get_xc_parallel(&self) -> bool {
        self.xc_parallel
    }

    /// Reads `key = value` lines from `inpfile`; keys not present keep their defaults.
    pub fn read_file(&mut self, inpfile: &str) -> Result<(), ControlError> {
        let lines = self.read_file_data_to_vec(inpfile)?;

        self.apply_lines(lines.iter().map(|s| s.as_str()))
    }

    pub fn read_str(&mut self, text: &str) -> Result<(), ControlError> {
        self.apply_lines(text.lines())
    }

    fn apply_lines<'a>(&mut self, lines: impl Iterator<Item = &'a str>) -> Result<(), ControlError> {
        for (i, raw) in lines.enumerate() {
            let line_no = i + 1;

            let line = match raw.find('#') {
                Some(pos) => &raw[..pos],
                None => raw,
            }
            .trim();

            if line.is_empty() {
                continue;
            }

            let s: Vec<&str> = line.split('=').map(|x| x.trim()).collect();

            if s.len() != 2 || s[0].is_empty() {
                return Err(ControlError::MalformedLine {
                    line_no,
                    line: raw.to_string(),
                });
            }

            let (key, value) = (s[0], s[1]);

            let invalid = || ControlError::InvalidValue {
                line_no,
                key: key.to_string(),
                value: value.to_string(),
            };

            match key {
                "verbosity" => {
                    self.verbosity = value.to_lowercase();
                }

                "spin_scheme" => {
                    let v = value.to_lowercase();
                    if v != "nonspin" && v != "spin" {
                        return Err(invalid());
                    }
                    self.spin_scheme = v;
                }

                "xc_scheme" => {
                    self.xc_scheme = value.to_lowercase();
                }

                "rho_policy" => {
                    let v = value.to_lowercase();
                    if v != "reject" && v != "clamp" {
                        return Err(invalid());
                    }
                    self.rho_policy = v;
                }

                "xc_chunk_size" => {
                    let n: usize = value.parse().map_err(|_| invalid())?;
                    if n == 0 {
                        return Err(invalid());
                    }
                    self.xc_chunk_size = n;
                }

                "xc_parallel" => {
                    self.xc_parallel = value.parse().map_err(|_| invalid())?;
                }

                _ => {
                    return Err(ControlError::UnknownParameter {
                        line_no,
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn read_file_data_to_vec(&self, inpfile: &str) -> Result<Vec<String>, ControlError> {
        let file = File::open(inpfile).map_err(|source| ControlError::Io {
            path: PathBuf::from(inpfile),
            source,
        })?;

        let lines = BufReader::new(file).lines();

        lines
            .collect::<Result<Vec<String>, _>>()
            .map_err(|source| ControlError::Io {
                path: PathBuf::from(inpfile),
                source,
            })
    }

    pub fn display(&self) {
        const OUT_WIDTH1: usize = 28;
        const OUT_WIDTH2: usize = 18;

        info!("   {:-^80}", " control parameters ");

        info!(
            "   {:<width1$} = {:>width2$}",
            "verbosity",
            self.get_verbosity(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        info!(
            "   {:<width1$} = {:>width2$}",
            "spin_scheme",
            self.get_spin_scheme(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        info!(
            "   {:<width1$} = {:>width2$}",
            "xc_scheme",
            self.get_xc_scheme(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        info!(
            "   {:<width1$} = {:>width2$}",
            "rho_policy",
            self.get_rho_policy(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        info!(
            "   {:<width1$} = {:>width2$}",
            "xc_chunk_size",
            self.get_xc_chunk_size(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );

        info!(
            "   {:<width1$} = {:>width2$}",
            "xc_parallel",
            self.get_xc_parallel(),
            width1 = OUT_WIDTH1,
            width2 = OUT_WIDTH2
        );
    }
}
