//! Fixed-size records of the icon container.
//!
//! Every record writes itself field by field with `to_le_bytes`, so the
//! output does not depend on host byte order or struct layout.

/// Edge length of the single embedded image, in pixels.
pub const ICON_DIMENSION: u8 = 16;

/// Bits per pixel of the embedded image.
pub const BIT_COUNT: u16 = 32;

/// One pixel in blue, green, red, alpha byte order.
pub const PIXEL_BGRA: [u8; 4] = [0xFF, 0x80, 0x00, 0xFF];

pub const ICON_DIR_LEN: usize = 6;
pub const ICON_DIR_ENTRY_LEN: usize = 16;
pub const BITMAP_INFO_HEADER_LEN: usize = 40;

/// Raw pixel bytes: 16 * 16 pixels, 4 bytes each.
pub const PIXEL_DATA_LEN: usize =
    ICON_DIMENSION as usize * ICON_DIMENSION as usize * PIXEL_BGRA.len();

/// Offset of the bitmap header from the start of the file.
pub const IMAGE_OFFSET: u32 = (ICON_DIR_LEN + ICON_DIR_ENTRY_LEN) as u32;

/// Size of the image resource the directory entry points at.
pub const IMAGE_RESOURCE_LEN: u32 = (BITMAP_INFO_HEADER_LEN + PIXEL_DATA_LEN) as u32;

/// Total length of an encoded icon file.
pub const ICON_FILE_LEN: usize =
    ICON_DIR_LEN + ICON_DIR_ENTRY_LEN + BITMAP_INFO_HEADER_LEN + PIXEL_DATA_LEN;

/// Resource type stored in the directory header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum ResourceType {
    Icon = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDir {
    pub resource_type: ResourceType,
    pub count: u16,
}

impl IconDir {
    pub fn single_icon() -> Self {
        IconDir {
            resource_type: ResourceType::Icon,
            count: 1,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&0u16.to_le_bytes()); // reserved
        out.extend_from_slice(&(self.resource_type as u16).to_le_bytes());
        out.extend_from_slice(&self.count.to_le_bytes());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDirEntry {
    pub width: u8,
    pub height: u8,
    pub color_count: u8,
    pub planes: u16,
    pub bit_count: u16,
    pub bytes_in_res: u32,
    pub image_offset: u32,
}

impl IconDirEntry {
    pub fn placeholder() -> Self {
        IconDirEntry {
            width: ICON_DIMENSION,
            height: ICON_DIMENSION,
            color_count: 0,
            planes: 1,
            bit_count: BIT_COUNT,
            bytes_in_res: IMAGE_RESOURCE_LEN,
            image_offset: IMAGE_OFFSET,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(self.width);
        out.push(self.height);
        out.push(self.color_count);
        out.push(0); // reserved
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.bytes_in_res.to_le_bytes());
        out.extend_from_slice(&self.image_offset.to_le_bytes());
    }
}

/// The 40-byte BITMAPINFOHEADER that precedes the pixel data.
///
/// `height` is twice the image height: icon bitmaps count the XOR plane and
/// the AND mask plane together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapInfoHeader {
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    pub compression: u32,
    pub size_image: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl BitmapInfoHeader {
    pub fn placeholder() -> Self {
        let dimension = i32::from(ICON_DIMENSION);
        BitmapInfoHeader {
            width: dimension,
            height: dimension * 2,
            planes: 1,
            bit_count: BIT_COUNT,
            compression: 0,
            size_image: PIXEL_DATA_LEN as u32,
            x_pels_per_meter: 0,
            y_pels_per_meter: 0,
            colors_used: 0,
            colors_important: 0,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(BITMAP_INFO_HEADER_LEN as u32).to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.size_image.to_le_bytes());
        out.extend_from_slice(&self.x_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }
}

/// Solid-color pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBuffer {
    pub pixel: [u8; 4],
    pub count: usize,
}

impl PixelBuffer {
    pub fn placeholder() -> Self {
        PixelBuffer {
            pixel: PIXEL_BGRA,
            count: ICON_DIMENSION as usize * ICON_DIMENSION as usize,
        }
    }

    pub fn write_to(&self, out: &mut Vec<u8>) {
        for _ in 0..self.count {
            out.extend_from_slice(&self.pixel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_dir_bytes() {
        let mut out = Vec::new();
        IconDir::single_icon().write_to(&mut out);
        assert_eq!(out, [0x00, 0x00, 0x01, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn entry_bytes() {
        let mut out = Vec::new();
        IconDirEntry::placeholder().write_to(&mut out);
        assert_eq!(out.len(), ICON_DIR_ENTRY_LEN);
        assert_eq!(
            out,
            [
                0x10, 0x10, 0x00, 0x00, 0x01, 0x00, 0x20, 0x00, 0x28, 0x04, 0x00, 0x00, 0x16,
                0x00, 0x00, 0x00,
            ]
        );
    }

    #[test]
    fn bitmap_header_bytes() {
        let mut out = Vec::new();
        BitmapInfoHeader::placeholder().write_to(&mut out);
        assert_eq!(out.len(), BITMAP_INFO_HEADER_LEN);
        assert_eq!(&out[..16], &[
            0x28, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x01, 0x00,
            0x20, 0x00,
        ]);
        assert_eq!(&out[20..24], &[0x00, 0x04, 0x00, 0x00]);
        assert!(out[16..20].iter().all(|&b| b == 0));
        assert!(out[24..].iter().all(|&b| b == 0));
    }

    #[test]
    fn bitmap_height_covers_both_masks() {
        let header = BitmapInfoHeader::placeholder();
        assert_eq!(header.height, header.width * 2);
    }

    #[test]
    fn pixel_buffer_is_solid() {
        let mut out = Vec::new();
        PixelBuffer::placeholder().write_to(&mut out);
        assert_eq!(out.len(), PIXEL_DATA_LEN);
        assert!(out.chunks_exact(4).all(|px| px == PIXEL_BGRA));
    }

    #[test]
    fn derived_sizes() {
        assert_eq!(PIXEL_DATA_LEN, 1024);
        assert_eq!(IMAGE_RESOURCE_LEN, 1064);
        assert_eq!(IMAGE_OFFSET, 22);
        assert_eq!(ICON_FILE_LEN, 1086);
    }
}
