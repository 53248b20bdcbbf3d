use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_htslib::bam;
use rust_htslib::bam::header::HeaderRecord;
use rust_htslib::bam::record::{Aux, Cigar, CigarString};
use rust_htslib::bam::Record;
use tempfile::TempDir;

use contigfeat::core::io::FastaReader;

pub const CONTIG_LEN: usize = 500;
pub const CONTIGS: [&str; 2] = ["Contig1", "TwoReads"];

const PROPER: u16 = 0x1 | 0x2 | 0x20;

pub struct Fixture {
    // Removed on drop
    pub dir: TempDir,
    pub bam: PathBuf,
    pub fasta: PathBuf,
}

impl Fixture {
    pub fn out(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Indexed fasta file with only the given contigs.
    pub fn fasta_with(&self, name: &str, contigs: &[&str]) -> PathBuf {
        let path = self.out(name);
        write_fasta(&path, contigs);
        path
    }
}

// 4bp blocks at 0..4 and 420..424
fn record(tid: i32, name: &str, seq: &str, score: i8, mapq: u8) -> Record {
    let cigar = CigarString(vec![Cigar::Match(4), Cigar::RefSkip(416), Cigar::Match(4)]);
    let mut record = Record::new();
    record.set(name.as_bytes(), Some(&cigar), seq.as_bytes(), &vec![30; seq.len()]);
    record.set_tid(tid);
    record.set_pos(0);
    record.set_mtid(tid);
    record.set_mpos(450);
    record.set_insert_size(454);
    record.set_flags(PROPER);
    record.set_mapq(mapq);
    record.push_aux(b"AS", Aux::I8(score)).unwrap();
    record
}

fn write_bam(path: &Path) {
    let mut header = bam::Header::new();
    for contig in CONTIGS {
        header.push_record(HeaderRecord::new(b"SQ").push_tag(b"SN", &contig).push_tag(b"LN", &CONTIG_LEN));
    }

    {
        let mut writer = bam::Writer::from_path(path, &header, bam::Format::Bam).unwrap();
        let records = [
            record(0, "r001", "AAAACCCC", -27, 60),
            record(1, "r001", "AAAACCCC", 0, 6),
            record(1, "r002", "AGGGTTTT", -28, 7),
        ];
        for r in &records {
            writer.write(r).unwrap();
        }
    }
    bam::index::build(path, None, bam::index::Type::Bai, 1).unwrap();
}

fn write_fasta(path: &Path, contigs: &[&str]) {
    {
        let mut file = File::create(path).unwrap();
        let sequence = "A".repeat(CONTIG_LEN);
        for contig in contigs {
            writeln!(file, ">{}", contig).unwrap();
            for line in sequence.as_bytes().chunks(60) {
                file.write_all(line).unwrap();
                writeln!(file).unwrap();
            }
        }
    }
    // Creates the .fai index before any worker thread opens the file
    FastaReader::new(path).unwrap();
}

pub fn build() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let (bam, fasta) = (dir.path().join("reads.bam"), dir.path().join("contigs.fa"));
    write_bam(&bam);
    write_fasta(&fasta, &CONTIGS);
    Fixture { dir, bam, fasta }
}
