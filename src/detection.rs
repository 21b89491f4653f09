use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltwh};

/// Detector output for one object in one frame.
///
/// Contains (x,y) of the center and (width,height) of bbox
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    #[serde(rename = "p")]
    pub confidence: f32,
    #[serde(rename = "c")]
    pub class: i32,
}

impl Detection {
    #[inline(always)]
    pub fn bbox(&self) -> BBox<Ltwh> {
        BBox::ltwh(self.xmin(), self.ymin(), self.w, self.h)
    }

    #[inline(always)]
    pub fn xmax(&self) -> f32 {
        self.x + self.w / 2.
    }

    #[inline(always)]
    pub fn ymax(&self) -> f32 {
        self.y + self.h / 2.
    }

    #[inline(always)]
    pub fn xmin(&self) -> f32 {
        self.x - self.w / 2.
    }

    #[inline(always)]
    pub fn ymin(&self) -> f32 {
        self.y - self.h / 2.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bbox_from_center() {
        let det = Detection {
            x: 50.0,
            y: 40.0,
            w: 20.0,
            h: 10.0,
            confidence: 0.8,
            class: 0,
        };

        assert_eq!(det.bbox().as_slice(), &[40.0, 35.0, 20.0, 10.0]);
        assert_eq!(det.xmax(), 60.0);
        assert_eq!(det.ymax(), 45.0);
    }

    #[test]
    fn short_field_names() {
        let det: Detection =
            serde_json::from_str(r#"{"x":1.0,"y":2.0,"w":3.0,"h":4.0,"p":0.5,"c":7}"#).unwrap();

        assert_eq!(det.confidence, 0.5);
        assert_eq!(det.class, 7);
    }
}
