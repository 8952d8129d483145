//! Report output.
//!
//! The simulation core hands each finished run to a [`ReportSink`]; the
//! sink has no influence on scheduling results. [`ConsoleReport`] renders
//! the classic text layout: a title banner, a Gantt timeline and a boxed
//! summary table with footer averages.

use std::io::Write;

use crate::error::Result;
use crate::models::{ExecutionSlice, ScheduleRow};
use crate::scheduler::ScheduleRun;

const GANTT_CELL_WIDTH: usize = 8;
const TABLE_HEADER: [&str; 7] = [
    "ID",
    "PRIORITY",
    "BURST",
    "ARRIVAL",
    "WAIT",
    "TURNAROUND",
    "EXIT",
];

/// Destination for rendered runs.
pub trait ReportSink {
    fn write_title(&mut self, title: &str) -> Result<()>;

    /// Renders the timeline of `[start..stop]` bars.
    fn write_gantt(&mut self, slices: &[ExecutionSlice]) -> Result<()>;

    /// Renders the per-process rows plus a footer of aggregate statistics.
    fn write_table(
        &mut self,
        rows: &[ScheduleRow],
        average_waiting: f64,
        average_turnaround: f64,
        throughput: f64,
    ) -> Result<()>;
}

/// Sends one run to `sink` in title, Gantt, table order.
pub fn report_run<S: ReportSink + ?Sized>(sink: &mut S, run: &ScheduleRun) -> Result<()> {
    sink.write_title(run.algorithm.title())?;
    sink.write_gantt(&run.schedule.slices)?;
    sink.write_table(
        &run.schedule.rows,
        run.summary.average_waiting,
        run.summary.average_turnaround,
        run.summary.throughput,
    )
}

/// Plain-text renderer over any writer.
#[derive(Debug)]
pub struct ConsoleReport<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleReport<W> {
    fn write_title(&mut self, title: &str) -> Result<()> {
        let rule = "-".repeat(title.len() * 2);
        writeln!(self.out, "{rule}")?;
        writeln!(self.out, "{} {title}", " ".repeat(title.len() / 2))?;
        writeln!(self.out, "{rule}")?;
        Ok(())
    }

    fn write_gantt(&mut self, slices: &[ExecutionSlice]) -> Result<()> {
        writeln!(self.out, "Gantt schedule")?;

        let mut bars = String::from("|");
        for slice in slices {
            let pid = slice.process_id.to_string();
            let padding = " ".repeat(GANTT_CELL_WIDTH.saturating_sub(pid.len()) / 2);
            bars.push_str(&format!("{padding}{pid}{padding}|"));
        }
        writeln!(self.out, "{bars}")?;

        let mut ticks = String::new();
        for (i, slice) in slices.iter().enumerate() {
            ticks.push_str(&format!("{}\t", slice.start));
            if i + 1 == slices.len() {
                ticks.push_str(&slice.stop.to_string());
            }
        }
        writeln!(self.out, "{ticks}")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn write_table(
        &mut self,
        rows: &[ScheduleRow],
        average_waiting: f64,
        average_turnaround: f64,
        throughput: f64,
    ) -> Result<()> {
        writeln!(self.out, "Schedule table")?;

        let body: Vec<[String; 7]> = rows.iter().map(row_cells).collect();
        let footer: [[String; 7]; 2] = [
            footer_line("Average", "Average", "Throughput"),
            footer_line(
                &format!("{average_waiting:.2}"),
                &format!("{average_turnaround:.2}"),
                &format!("{throughput:.2}/t"),
            ),
        ];
        let header = TABLE_HEADER.map(String::from);

        let mut widths = [0usize; 7];
        for line in std::iter::once(&header).chain(&body).chain(&footer) {
            for (w, cell) in widths.iter_mut().zip(line) {
                *w = (*w).max(cell.len());
            }
        }

        let border = border_line(&widths);
        writeln!(self.out, "{border}")?;
        writeln!(self.out, "{}", table_line(&header, &widths))?;
        writeln!(self.out, "{border}")?;
        for line in &body {
            writeln!(self.out, "{}", table_line(line, &widths))?;
        }
        writeln!(self.out, "{border}")?;
        for line in &footer {
            writeln!(self.out, "{}", table_line(line, &widths))?;
        }
        writeln!(self.out, "{border}")?;
        self.out.flush()?;
        Ok(())
    }
}

fn row_cells(row: &ScheduleRow) -> [String; 7] {
    [
        row.process_id.to_string(),
        row.priority.to_string(),
        row.burst.to_string(),
        row.arrival.to_string(),
        row.waiting.to_string(),
        row.turnaround.to_string(),
        row.completion.to_string(),
    ]
}

fn footer_line(wait: &str, turnaround: &str, throughput: &str) -> [String; 7] {
    [
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        wait.to_string(),
        turnaround.to_string(),
        throughput.to_string(),
    ]
}

fn border_line(widths: &[usize; 7]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn table_line(cells: &[String; 7], widths: &[usize; 7]) -> String {
    let mut line = String::from("|");
    for (cell, &w) in cells.iter().zip(widths) {
        line.push_str(&format!(" {cell:<w$} |"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::models::Process;
    use crate::scheduler::{simulate, Algorithm};

    fn render(run: &ScheduleRun) -> String {
        let mut report = ConsoleReport::new(Vec::new());
        report_run(&mut report, run).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    fn sample_run() -> ScheduleRun {
        let processes = vec![
            Process::new(1, 5, 0).with_priority(1),
            Process::new(2, 3, 2).with_priority(2),
            Process::new(3, 8, 4).with_priority(3),
        ];
        simulate(Algorithm::Fcfs, &processes, &SimulationConfig::default())
    }

    #[test]
    fn test_title_banner() {
        let mut report = ConsoleReport::new(Vec::new());
        report.write_title("Priority").unwrap();
        let out = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "-".repeat(16));
        assert_eq!(lines[1], "     Priority");
        assert_eq!(lines[2], "-".repeat(16));
    }

    #[test]
    fn test_gantt_layout() {
        let out = render(&sample_run());
        assert!(out.contains("Gantt schedule\n|   1   |   2   |   3   |\n0\t5\t8\t16\n"));
    }

    #[test]
    fn test_table_rows_and_footer() {
        let out = render(&sample_run());
        assert!(out.contains("Schedule table"));
        assert!(out.contains("| ID | PRIORITY | BURST | ARRIVAL |"));
        assert!(out.contains("| 2  | 2        | 3     | 2       | 3       | 6          | 8          |"));
        assert!(out.contains("2.33"));
        assert!(out.contains("7.67"));
        assert!(out.contains("0.19/t"));
    }

    #[test]
    fn test_empty_run_renders() {
        let run = simulate(Algorithm::RoundRobin, &[], &SimulationConfig::default());
        let out = render(&run);
        assert!(out.contains("Round-robin"));
        assert!(out.contains("0.00/t"));
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl ReportSink for Recorder {
        fn write_title(&mut self, _title: &str) -> Result<()> {
            self.calls.push("title");
            Ok(())
        }

        fn write_gantt(&mut self, _slices: &[ExecutionSlice]) -> Result<()> {
            self.calls.push("gantt");
            Ok(())
        }

        fn write_table(&mut self, _rows: &[ScheduleRow], _w: f64, _t: f64, _x: f64) -> Result<()> {
            self.calls.push("table");
            Ok(())
        }
    }

    #[test]
    fn test_report_order() {
        let mut recorder = Recorder::default();
        report_run(&mut recorder, &sample_run()).unwrap();
        assert_eq!(recorder.calls, vec!["title", "gantt", "table"]);
    }
}
