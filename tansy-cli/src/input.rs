use std::fs::File;
use std::path::Path;

use memmap2::{Advice, Mmap};

/// UNSAFE
/// Memory-map a file's contents so the whole input is materialized
/// before scanning. On Unix-alikes, advises the kernel of sequential access.
pub fn open_mmapped<P: AsRef<Path>>(path: P) -> Result<Mmap, std::io::Error> {
    let f = File::open(&path)?;
    let mmap = unsafe { Mmap::map(&f) }?;
    if cfg!(unix) {
        mmap.advise(Advice::Sequential)?;
    }
    Ok(mmap)
}
