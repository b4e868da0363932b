// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text forms of the core value types, as accepted on the command line and in
// configuration files.

use std::fmt;
use std::str::FromStr;

use crate::error::ScanwerkError;
use crate::types::{
    Border, Delta, Direction, Interpolation, Pixel, Point, Rectangle, RectangleSize,
    RotationDirection,
};

/// Parse a comma-separated list of exactly `N` integers.
fn parse_integers<const N: usize>(s: &str) -> Option<[i32; N]> {
    let mut values = [0i32; N];
    let mut parts = s.split(',');
    for slot in values.iter_mut() {
        *slot = parts.next()?.trim().parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(values)
}

/// Parse `"a"` or `"a,b"`. A single value is used for both.
fn parse_symmetric_integers(s: &str) -> Option<(i32, i32)> {
    match s.split_once(',') {
        None => {
            let value = s.trim().parse().ok()?;
            Some((value, value))
        }
        Some((first, second)) => Some((first.trim().parse().ok()?, second.trim().parse().ok()?)),
    }
}

impl FromStr for Rectangle {
    type Err = ScanwerkError;

    /// `"x1,y1,x2,y2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [x0, y0, x1, y1] =
            parse_integers::<4>(s).ok_or_else(|| ScanwerkError::InvalidRectangle(s.to_string()))?;
        Ok(Rectangle::new(Point::new(x0, y0), Point::new(x1, y1)))
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.vertex;
        write!(f, "[{},{},{},{}]", a.x, a.y, b.x, b.y)
    }
}

impl FromStr for RectangleSize {
    type Err = ScanwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScanwerkError::InvalidSize(s.to_string());
        let (width, height) = parse_symmetric_integers(s).ok_or_else(invalid)?;
        let width = u32::try_from(width).map_err(|_| invalid())?;
        let height = u32::try_from(height).map_err(|_| invalid())?;
        Ok(RectangleSize::new(width, height))
    }
}

impl fmt::Display for RectangleSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.width, self.height)
    }
}

impl FromStr for Delta {
    type Err = ScanwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (horizontal, vertical) =
            parse_symmetric_integers(s).ok_or_else(|| ScanwerkError::InvalidDelta(s.to_string()))?;
        Ok(Delta::new(horizontal, vertical))
    }
}

impl fmt::Display for Delta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.horizontal, self.vertical)
    }
}

impl FromStr for Border {
    type Err = ScanwerkError;

    /// `"left,top,right,bottom"`, all non-negative.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScanwerkError::InvalidBorder(s.to_string());
        let [left, top, right, bottom] = parse_integers::<4>(s).ok_or_else(invalid)?;
        if left < 0 || top < 0 || right < 0 || bottom < 0 {
            return Err(invalid());
        }
        Ok(Border {
            left,
            top,
            right,
            bottom,
        })
    }
}

impl FromStr for Pixel {
    type Err = ScanwerkError;

    /// `black`, `white`, a decimal value, or `#rrggbb` / `0xrrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "black" => return Ok(Pixel::BLACK),
            "white" => return Ok(Pixel::WHITE),
            _ => {}
        }
        let hex = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"));
        let value = match hex {
            Some(digits) => u32::from_str_radix(digits, 16),
            None => trimmed.parse::<u32>(),
        }
        .map_err(|_| ScanwerkError::InvalidColor(s.to_string()))?;
        Ok(Pixel::from_value(value))
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Pixel::BLACK => f.write_str("black"),
            Pixel::WHITE => f.write_str("white"),
            Pixel { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl FromStr for Direction {
    type Err = ScanwerkError;

    /// Any string containing `h` selects horizontal and any containing `v`
    /// selects vertical ("horizontal" has no `v`, "vertical" has no `h`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let direction = Direction {
            horizontal: s.contains(['h', 'H']),
            vertical: s.contains(['v', 'V']),
        };
        if direction.is_none() && !s.eq_ignore_ascii_case("none") {
            return Err(ScanwerkError::InvalidDirection(s.to_string()));
        }
        Ok(direction)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match (self.horizontal, self.vertical) {
            (true, true) => "[horizontal,vertical]",
            (true, false) => "[horizontal]",
            (false, true) => "[vertical]",
            (false, false) => "[none]",
        };
        f.write_str(text)
    }
}

impl FromStr for Interpolation {
    type Err = ScanwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(Interpolation::Nearest),
            "linear" => Ok(Interpolation::Linear),
            "cubic" => Ok(Interpolation::Cubic),
            _ => Err(ScanwerkError::InvalidInterpolation(s.to_string())),
        }
    }
}

impl FromStr for RotationDirection {
    type Err = ScanwerkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cw" | "clockwise" | "1" | "+1" => Ok(RotationDirection::Clockwise),
            "ccw" | "counterclockwise" | "-1" => Ok(RotationDirection::CounterClockwise),
            _ => Err(ScanwerkError::InvalidRotation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_needs_four_integers() {
        let r: Rectangle = "10,20,30,40".parse().unwrap();
        assert_eq!(r, Rectangle::from_coords(10, 20, 30, 40));
        assert!("10,20,30".parse::<Rectangle>().is_err());
        assert!("10,20,30,40,50".parse::<Rectangle>().is_err());
        assert!("a,b,c,d".parse::<Rectangle>().is_err());
        assert_eq!(r.to_string(), "[10,20,30,40]");
    }

    #[test]
    fn size_is_symmetric_and_non_negative() {
        assert_eq!("300".parse::<RectangleSize>().unwrap(), RectangleSize::new(300, 300));
        assert_eq!("300,200".parse::<RectangleSize>().unwrap(), RectangleSize::new(300, 200));
        assert!("-1,5".parse::<RectangleSize>().is_err());
    }

    #[test]
    fn delta_accepts_negative() {
        assert_eq!("-4".parse::<Delta>().unwrap(), Delta::new(-4, -4));
        assert_eq!("3,-7".parse::<Delta>().unwrap(), Delta::new(3, -7));
        assert!("".parse::<Delta>().is_err());
    }

    #[test]
    fn border_rejects_negative() {
        assert_eq!(
            "1,2,3,4".parse::<Border>().unwrap(),
            Border {
                left: 1,
                top: 2,
                right: 3,
                bottom: 4
            }
        );
        assert!("1,2,-3,4".parse::<Border>().is_err());
    }

    #[test]
    fn colors_by_name_and_value() {
        assert_eq!("black".parse::<Pixel>().unwrap(), Pixel::BLACK);
        assert_eq!("white".parse::<Pixel>().unwrap(), Pixel::WHITE);
        assert_eq!("#ff8000".parse::<Pixel>().unwrap(), Pixel::new(255, 128, 0));
        assert_eq!("0x0000ff".parse::<Pixel>().unwrap(), Pixel::new(0, 0, 255));
        assert_eq!("255".parse::<Pixel>().unwrap(), Pixel::new(0, 0, 255));
        assert!("purple".parse::<Pixel>().is_err());
        assert_eq!(Pixel::new(255, 128, 0).to_string(), "#ff8000");
        assert_eq!(Pixel::BLACK.to_string(), "black");
    }

    #[test]
    fn direction_by_letter() {
        let both: Direction = "horizontal,vertical".parse().unwrap();
        assert!(both.horizontal && both.vertical);
        let h: Direction = "h".parse().unwrap();
        assert!(h.horizontal && !h.vertical);
        let v: Direction = "Vertical".parse().unwrap();
        assert!(!v.horizontal && v.vertical);
        assert!("NONE".parse::<Direction>().unwrap().is_none());
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn interpolation_names() {
        assert_eq!("nearest".parse::<Interpolation>().unwrap(), Interpolation::Nearest);
        assert_eq!("LINEAR".parse::<Interpolation>().unwrap(), Interpolation::Linear);
        assert_eq!("cubic".parse::<Interpolation>().unwrap(), Interpolation::Cubic);
        assert!("lanczos".parse::<Interpolation>().is_err());
    }

    #[test]
    fn rotation_names() {
        assert_eq!("cw".parse::<RotationDirection>().unwrap(), RotationDirection::Clockwise);
        assert_eq!(
            "-1".parse::<RotationDirection>().unwrap(),
            RotationDirection::CounterClockwise
        );
        assert!("0".parse::<RotationDirection>().is_err());
    }
}
