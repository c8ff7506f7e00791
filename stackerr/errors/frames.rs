use std::{ffi::c_void, fmt, ops::Deref, path::PathBuf, sync::Arc};

/// Innermost frames hidden by default: the capture routine, its direct caller in this crate and that caller's public entry point.
/// Leaves the application's call site as the first reported frame.
pub const DEFAULT_SKIP: usize = 3;

/// The most frames ever kept for a single capture, deeper stacks are truncated.
pub const MAX_DEPTH: usize = 32;

/// An unresolved location on the call stack (a return address).
/// Symbol lookup only happens through [`Frame::resolve`], which is comparatively expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame(usize);

impl Frame {
    /// The raw instruction pointer this frame was captured at.
    pub fn ip(&self) -> usize {
        self.0
    }

    /// Resolve the frame to its function, file and line.
    /// Any part the debug info can't provide is left as `None`.
    pub fn resolve(&self) -> FrameInfo {
        let mut info = FrameInfo::default();
        let mut found = false;
        // Inlined calls produce several symbols for one address, the first is the innermost:
        backtrace::resolve(self.0 as *mut c_void, |symbol| {
            if found {
                return;
            }
            found = true;
            info.function = symbol.name().map(|name| format!("{:#}", name));
            info.file = symbol.filename().map(|path| path.to_path_buf());
            info.line = symbol.lineno();
        });
        info
    }
}

/// The resolved, human readable form of a [`Frame`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInfo {
    /// Demangled function name, without the trailing hash.
    pub function: Option<String>,
    /// Source file the function lives in.
    pub file: Option<PathBuf>,
    /// Line within `file`.
    pub line: Option<u32>,
}

impl FrameInfo {
    /// `file:line`, with `??` standing in for missing parts.
    pub fn location(&self) -> String {
        format!(
            "{}:{}",
            self.file
                .as_ref()
                .map(|f| f.display().to_string())
                .unwrap_or_else(|| "??".to_string()),
            self.line
                .map(|l| l.to_string())
                .unwrap_or_else(|| "??".to_string())
        )
    }

    /// The function name, or `<unknown>`.
    pub fn function_or_unknown(&self) -> &str {
        self.function.as_deref().unwrap_or("<unknown>")
    }
}

impl fmt::Display for FrameInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {} ({})", self.function_or_unknown(), self.location())
    }
}

/// An immutable, cheaply clonable run of captured frames, innermost first.
#[derive(Debug, Clone)]
pub struct Frames(Arc<[Frame]>);

impl Frames {
    /// True if both refer to the very same capture, not just equal addresses.
    pub fn ptr_eq(&self, other: &Frames) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Frames {
    type Target = [Frame];

    fn deref(&self) -> &[Frame] {
        &self.0
    }
}

impl From<Vec<Frame>> for Frames {
    fn from(frames: Vec<Frame>) -> Self {
        Self(frames.into())
    }
}

/// Pass the result of a counted inner call through this before returning it.
/// Stops an optimized build turning the call into a tail call, which would drop the caller's frame and throw the skip count off.
#[inline(always)]
pub(crate) fn keep_frame<T>(value: T) -> T {
    std::hint::black_box(value)
}

/// Walk the current call stack, returning at most [`MAX_DEPTH`] frames.
///
/// `skip` counts from this function itself (index 0), so `Some(1)` starts at whoever called `capture_frames`.
/// `None` uses [`DEFAULT_SKIP`].
/// A stack shallower than `skip` simply gives fewer (or no) frames.
#[inline(never)]
pub fn capture_frames(skip: Option<usize>) -> Frames {
    let skip = skip.unwrap_or(DEFAULT_SKIP);
    let anchor = capture_frames as *const () as usize;

    // Everything before our own frame belongs to the unwinder, the anchor is found by function start address.
    // Some platforms can't report function starts, fall back to treating the innermost frame as index 0.
    let mut walked: Vec<Frame> = Vec::with_capacity(MAX_DEPTH);
    let mut anchor_at: Option<usize> = None;
    backtrace::trace(|frame| {
        if anchor_at.is_none() && frame.symbol_address() as usize == anchor {
            anchor_at = Some(walked.len());
        }
        walked.push(Frame(frame.ip() as usize));
        walked.len()
            < anchor_at
                .unwrap_or(0)
                .saturating_add(skip)
                .saturating_add(MAX_DEPTH)
    });

    let start = anchor_at.unwrap_or(0).saturating_add(skip);
    walked
        .into_iter()
        .skip(start)
        .take(MAX_DEPTH)
        .collect::<Vec<_>>()
        .into()
}
