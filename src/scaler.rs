//-- scaler

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ParseErrorKind, ScaleError};
use crate::vertex;

/// mm -> m
pub const DEFAULT_FACTOR: f64 = 1000.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleStats {
    pub lines: usize,
    pub vertices: usize,
}

/// Divides every vertex position of an OBJ stream by `factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaler {
    factor: f64,
}

impl Default for Scaler {
    fn default() -> Scaler {
        Scaler {
            factor: DEFAULT_FACTOR,
        }
    }
}

impl Scaler {
    pub fn new(factor: f64) -> Result<Scaler, ScaleError> {
        if !factor.is_finite() || factor == 0.0 {
            return Err(ScaleError::InvalidFactor(factor));
        }
        Ok(Scaler { factor })
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Rescales one line. Pass-through lines come back borrowed and untouched,
    /// a vertex line (and only a vertex line) comes back owned, as a new
    /// `v x y z\n` record.
    pub fn scale_line<'a>(&self, l: &'a str) -> Result<Cow<'a, str>, ParseErrorKind> {
        if !vertex::is_vertex_line(l) {
            return Ok(Cow::Borrowed(l));
        }
        let p = vertex::parse_vertex(l)?.scaled_down(self.factor);
        Ok(Cow::Owned(format!("{}\n", p)))
    }

    /// Single forward pass over `reader`, one line at a time.
    ///
    /// Non-vertex lines are written with their original terminator (or none,
    /// for a last line without one). On a malformed vertex line, or a line
    /// that is not valid UTF-8, the lines before it are flushed to `writer`
    /// and the pass stops.
    ///
    /// Lines end at `\n` only: a file with bare `\r` (old Mac) endings is read
    /// as a single line, and if that line starts with `v` only its first
    /// 3 coordinates are kept.
    pub fn scale_stream<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
    ) -> Result<ScaleStats, ScaleError> {
        let mut stats = ScaleStats::default();
        let mut l = String::new();
        loop {
            l.clear();
            match reader.read_line(&mut l) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    writer.flush()?;
                    return Err(ScaleError::Encoding {
                        line: stats.lines + 1,
                    });
                }
                Err(e) => return Err(e.into()),
            }
            stats.lines += 1;
            match self.scale_line(&l) {
                Ok(Cow::Borrowed(s)) => writer.write_all(s.as_bytes())?,
                Ok(Cow::Owned(s)) => {
                    writer.write_all(s.as_bytes())?;
                    stats.vertices += 1;
                    debug!("vertex #{} at line {}", stats.vertices, stats.lines);
                }
                Err(kind) => {
                    writer.flush()?;
                    return Err(ScaleError::Parse {
                        line: stats.lines,
                        kind,
                    });
                }
            }
        }
        writer.flush()?;
        Ok(stats)
    }

    /// Rescales the OBJ file `input` into `output`.
    ///
    /// The result goes to a temporary file next to `output` that is renamed
    /// over it only once the whole input went through: on any error `output`
    /// is left as it was (or absent). Nothing is created if `input` can't be
    /// opened.
    ///
    /// A replaced `output` keeps its permissions; a new one gets the usual
    /// umask-derived mode, as if created with `File::create`.
    pub fn scale_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ScaleStats, ScaleError> {
        let input = input.as_ref();
        let output = output.as_ref();
        let fi = File::open(input).map_err(|e| ScaleError::file_access(input, e))?;
        if same_file(input, output) {
            return Err(ScaleError::SameFile(output.to_path_buf()));
        }
        let dir = match output.parent() {
            Some(d) if !d.as_os_str().is_empty() => d,
            _ => Path::new("."),
        };
        let tmp = temp_output(dir, output).map_err(|e| ScaleError::file_access(output, e))?;
        info!(
            "{} -> {} (factor {})",
            input.display(),
            output.display(),
            self.factor
        );
        let stats = {
            let mut fo = BufWriter::new(tmp.as_file());
            self.scale_stream(BufReader::new(fi), &mut fo)?
        };
        tmp.persist(output)
            .map_err(|e| ScaleError::file_access(output, e.error))?;
        info!("{} written", output.display());
        Ok(stats)
    }
}

//-- tempfile defaults to 0600, the final file should not
fn temp_output(dir: &Path, output: &Path) -> io::Result<NamedTempFile> {
    let mut b = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        b.permissions(fs::Permissions::from_mode(0o666)); //-- umask applies
    }
    let tmp = b.tempfile_in(dir)?;
    if let Ok(m) = fs::metadata(output) {
        fs::set_permissions(tmp.path(), m.permissions())?;
    }
    Ok(tmp)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
