use std::io::Write;

/// A single FASTA record, borrowing its sequence from the generator's buffer.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Record<'a> {
    /// 1-based record number
    pub id: u64,
    pub seq: &'a [u8],
}

impl<'a> Record<'a> {
    pub fn new(id: u64, seq: &'a [u8]) -> Self {
        Record { id, seq }
    }

    /// The header line without its terminator, e.g. `>seq12`.
    pub fn header(&self) -> String {
        format!(">seq{}", self.id)
    }

    /// Approximate serialized size: header line and sequence line, each plus one
    /// byte for its line terminator.
    pub fn approx_len(&self) -> u64 {
        (self.header().len() + 1 + self.seq.len() + 1) as u64
    }

    /// Writes the record as two `\n`-terminated lines.
    ///
    /// # Arguments
    ///
    /// * `writer` - Any `std::io::Write`. Callers writing many records should pass a
    ///   `BufWriter`, since each record is several small writes.
    pub fn write_to(&self, writer: &mut impl Write) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header())?;
        writer.write_all(self.seq)?;
        writer.write_all(b"\n")
    }
}

#[cfg(test)]
mod tests {
    use super::Record;

    #[test]
    fn header_has_no_padding() {
        assert_eq!(Record::new(1, b"").header(), ">seq1");
        assert_eq!(Record::new(1042, b"").header(), ">seq1042");
    }

    #[test]
    fn approx_len_counts_terminators() {
        let seq = [b'A'; 80];
        assert_eq!(Record::new(1, &seq).approx_len(), 87);
        assert_eq!(Record::new(10, &seq).approx_len(), 88);
        assert_eq!(Record::new(5, b"").approx_len(), 7);
    }

    #[test]
    fn write_two_lines() {
        let mut out = Vec::new();
        let rec = Record::new(3, b"ACGT");
        rec.write_to(&mut out).unwrap();

        assert_eq!(out, b">seq3\nACGT\n");
        assert_eq!(out.len() as u64, rec.approx_len());
    }
}
