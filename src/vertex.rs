//-- vertex

use std::fmt;

use crate::error::ParseErrorKind;

/// The position of a `v` record. `w` is never kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x, y, z }
    }

    pub fn scaled_down(&self, factor: f64) -> Point {
        Point {
            x: self.x / factor,
            y: self.y / factor,
            z: self.z / factor,
        }
    }
}

/// Written as an OBJ record, fixed-point with 5 decimals, no line terminator.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v {:.5} {:.5} {:.5}", self.x, self.y, self.z)
    }
}

/// `true` if the first token of `l` is exactly `v` (so not `vn`, `vt`, `vp`).
pub fn is_vertex_line(l: &str) -> bool {
    l.split_whitespace().next() == Some("v")
}

/// Parses the 3 coordinates following `v`; anything after the 3rd is dropped.
///
/// Tokens are parsed left to right, so `v 1.0 abc` reports the bad number
/// rather than the missing one.
pub fn parse_vertex(l: &str) -> Result<Point, ParseErrorKind> {
    let mut c: [f64; 3] = [0.0; 3];
    let mut found: usize = 0;
    for (i, tok) in l.split_whitespace().skip(1).take(3).enumerate() {
        c[i] = parse_f64(tok)?;
        found += 1;
    }
    if found < 3 {
        return Err(ParseErrorKind::MissingCoordinate { found });
    }
    Ok(Point::new(c[0], c[1], c[2]))
}

fn parse_f64(tok: &str) -> Result<f64, ParseErrorKind> {
    tok.parse::<f64>()
        .map_err(|_| ParseErrorKind::InvalidNumber {
            token: tok.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify() {
        assert!(is_vertex_line("v 1 2 3"));
        assert!(is_vertex_line("v 1 2 3\r\n"));
        assert!(is_vertex_line("   v\t1 2 3\n"));
        assert!(!is_vertex_line("vn 0 0 1"));
        assert!(!is_vertex_line("vt 0.5 0.5"));
        assert!(!is_vertex_line("f 1 2 3"));
        assert!(!is_vertex_line("# v 1 2 3"));
        assert!(!is_vertex_line(""));
        assert!(!is_vertex_line("\n"));
    }

    #[test]
    fn parse_three() {
        let p = parse_vertex("v 1000.0 2000.0 -500.0\n").unwrap();
        assert_eq!(p, Point::new(1000.0, 2000.0, -500.0));
    }

    #[test]
    fn parse_drops_w() {
        let p = parse_vertex("v 100.0 200.0 300.0 1.0").unwrap();
        assert_eq!(p, Point::new(100.0, 200.0, 300.0));
        //-- extra tokens are not even looked at
        let p = parse_vertex("v 1 2 3 not-a-number").unwrap();
        assert_eq!(p, Point::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            parse_vertex("v 1.0 abc"),
            Err(ParseErrorKind::InvalidNumber {
                token: "abc".to_string()
            })
        );
        assert_eq!(
            parse_vertex("v 1.0 2.0"),
            Err(ParseErrorKind::MissingCoordinate { found: 2 })
        );
        assert_eq!(
            parse_vertex("v"),
            Err(ParseErrorKind::MissingCoordinate { found: 0 })
        );
    }

    #[test]
    fn display() {
        let p = Point::new(1000.0, 2000.0, -500.0).scaled_down(1000.0);
        assert_eq!(p.to_string(), "v 1.00000 2.00000 -0.50000");
        let p = Point::new(1234.5, 3.0, 1.0e6).scaled_down(1000.0);
        assert_eq!(p.to_string(), "v 1.23450 0.00300 1000.00000");
    }
}
