use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frames, ImageDecoder};
use led_core::frame::FrameBuffer;
use led_core::traits::FrameSource;

use crate::error::{DecodeError, SourceError};

/// Source GIF brute : chaque frame telle que stockée dans le conteneur,
/// avec son propre placement `left/top/width/height`.
///
/// Les entrées de palette transparentes ressortent avec alpha = 0.
pub struct GifSource<R: Read> {
    decoder: gif::Decoder<R>,
    index: usize,
}

impl<R: Read> GifSource<R> {
    /// Read the container header and prepare RGBA frame expansion.
    ///
    /// # Errors
    /// Returns an error if the header is not a valid GIF header.
    pub fn new(reader: R) -> Result<Self, DecodeError> {
        let mut options = gif::DecodeOptions::new();
        options.set_color_output(gif::ColorOutput::RGBA);
        let decoder = options.read_info(reader)?;
        Ok(Self { decoder, index: 0 })
    }
}

impl<R: Read> FrameSource for GifSource<R> {
    type Error = DecodeError;

    fn next_frame(&mut self) -> Result<Option<FrameBuffer>, DecodeError> {
        let (screen_w, screen_h) = self.native_size();
        let Some(frame) = self.decoder.read_next_frame()? else {
            return Ok(None);
        };

        let (left, top) = (u32::from(frame.left), u32::from(frame.top));
        let (width, height) = (u32::from(frame.width), u32::from(frame.height));
        if left + width > screen_w || top + height > screen_h {
            return Err(DecodeError::FrameOutOfBounds { index: self.index });
        }

        let fb = FrameBuffer::from_rgba(left, top, width, height, frame.buffer.to_vec())?;
        log::debug!(
            "frame {}: {width}×{height} at ({left}, {top})",
            self.index
        );
        self.index += 1;
        Ok(Some(fb))
    }

    fn native_size(&self) -> (u32, u32) {
        (
            u32::from(self.decoder.width()),
            u32::from(self.decoder.height()),
        )
    }
}

/// Source GIF composée : chaque frame est rendue sur le canevas complet
/// (dispositions appliquées), placée en (0, 0).
pub struct CoalescedSource {
    frames: Frames<'static>,
    size: (u32, u32),
}

impl CoalescedSource {
    /// # Errors
    /// Returns an error if the header is not a valid GIF header.
    pub fn new<R: BufRead + Seek + 'static>(reader: R) -> Result<Self, DecodeError> {
        let decoder = GifDecoder::new(reader)?;
        let size = decoder.dimensions();
        Ok(Self {
            frames: decoder.into_frames(),
            size,
        })
    }
}

impl FrameSource for CoalescedSource {
    type Error = DecodeError;

    fn next_frame(&mut self) -> Result<Option<FrameBuffer>, DecodeError> {
        let Some(frame) = self.frames.next().transpose()? else {
            return Ok(None);
        };
        let (left, top) = (frame.left(), frame.top());
        let buffer = frame.into_buffer();
        let (width, height) = buffer.dimensions();
        Ok(Some(FrameBuffer::from_rgba(
            left,
            top,
            width,
            height,
            buffer.into_raw(),
        )?))
    }

    fn native_size(&self) -> (u32, u32) {
        self.size
    }
}

/// Draine une source jusqu'à épuisement.
fn collect_frames<S: FrameSource>(source: &mut S) -> Result<Vec<FrameBuffer>, S::Error> {
    let mut frames = Vec::new();
    while let Some(frame) = source.next_frame()? {
        frames.push(frame);
    }
    Ok(frames)
}

/// Décode toutes les frames d'un fichier GIF avant toute écriture.
///
/// `coalesce` choisit entre les frames brutes et les frames composées sur le
/// canevas complet.
///
/// # Errors
/// - [`SourceError::Open`] if the file cannot be opened.
/// - [`SourceError::Decode`] if the container is malformed. A container
///   without any image data ends right after its header and fails here too.
///
/// # Example
/// ```no_run
/// use led_source::decode_all;
/// use std::path::Path;
/// let frames = decode_all(Path::new("ring.gif"), false).unwrap();
/// ```
pub fn decode_all(path: &Path, coalesce: bool) -> Result<Vec<FrameBuffer>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let decoded = if coalesce {
        CoalescedSource::new(reader).and_then(|mut s| collect_frames(&mut s))
    } else {
        GifSource::new(reader).and_then(|mut s| collect_frames(&mut s))
    };
    let frames = decoded.map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("{}: {} frame(s) decoded", path.display(), frames.len());
    Ok(frames)
}
