//! Terminal-size-adaptive screen geometry.
//!
//! Screen bands, top to bottom:
//!
//! ```text
//! summary band   (full: title, updated, blank, one row per phase, blank)
//! column header
//! rule
//! table rows     (visible_rows)
//! rule           \
//! refresh status  } footer, only when height >= FOOTER_HEIGHT
//! control legend /
//! ```

/// Fixed column widths for name, id, status and IP address.
pub const NAME_WIDTH: u16 = 12;
pub const ID_WIDTH: u16 = 15;
pub const STATUS_WIDTH: u16 = 18;
pub const IP_WIDTH: u16 = 16;
/// Minimum width of the trailing connection id column.
pub const CONNECTION_MIN_WIDTH: u16 = 20;
/// Spacing reserved around the columns when sizing the connection id column.
pub const COLUMN_SPACING: u16 = 8;

/// Column header plus rule.
pub const TABLE_CHROME_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 3;
/// Table rows the full summary band must leave free, otherwise it compacts.
pub const MIN_TABLE_ROWS: u16 = 3;

/// How the summary band is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMode {
    /// Title, last-update time and one row per distinct phase.
    Full { phase_rows: u16 },
    /// Everything squeezed into one row.
    Compact,
}

/// Horizontal placement of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub x: u16,
    pub width: u16,
}

/// Table column geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub name: Column,
    pub id: Column,
    pub status: Column,
    pub ip: Column,
    pub connection: Column,
}

impl Columns {
    /// Computes columns for a terminal `width` cells wide.
    ///
    /// Fixed columns keep their minimum widths even on narrow terminals;
    /// writes past the right edge are clipped at render time.
    pub fn for_width(width: u16) -> Self {
        let fixed = NAME_WIDTH + ID_WIDTH + STATUS_WIDTH + IP_WIDTH;
        let connection_width = width
            .saturating_sub(fixed + COLUMN_SPACING)
            .max(CONNECTION_MIN_WIDTH);

        let name = Column {
            x: 0,
            width: NAME_WIDTH,
        };
        let id = Column {
            x: name.x + name.width + 1,
            width: ID_WIDTH,
        };
        let status = Column {
            x: id.x + id.width + 1,
            width: STATUS_WIDTH,
        };
        let ip = Column {
            x: status.x + status.width + 1,
            width: IP_WIDTH,
        };
        let connection = Column {
            x: ip.x + ip.width + 1,
            width: connection_width,
        };
        Self {
            name,
            id,
            status,
            ip,
            connection,
        }
    }

    pub fn all(&self) -> [Column; 5] {
        [self.name, self.id, self.status, self.ip, self.connection]
    }
}

/// Footer row positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footer {
    pub rule_row: u16,
    pub status_row: u16,
    pub legend_row: u16,
}

/// Complete frame geometry. All values are non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: u16,
    pub height: u16,
    pub summary: SummaryMode,
    pub summary_height: u16,
    pub columns: Columns,
    /// Row of the column header (also where the empty-table notice goes).
    pub table_header_row: u16,
    /// First record row.
    pub table_start_row: u16,
    /// Number of record rows that fit; 0 on degenerate terminals.
    pub visible_rows: u16,
    pub footer: Option<Footer>,
}

impl ScreenLayout {
    pub fn visible_rows(&self) -> usize {
        usize::from(self.visible_rows)
    }
}

/// Computes the frame geometry.
///
/// `phase_count` is the number of distinct phases in the snapshot; it only
/// contributes rows when there are records to summarise.
pub fn compute_layout(width: u16, height: u16, record_count: usize, phase_count: usize) -> ScreenLayout {
    let phase_rows = if record_count == 0 {
        0
    } else {
        u16::try_from(phase_count).unwrap_or(u16::MAX)
    };

    let mut footer_height = if height >= FOOTER_HEIGHT { FOOTER_HEIGHT } else { 0 };

    let full_height = phase_rows.saturating_add(4);
    let needed = full_height
        .saturating_add(TABLE_CHROME_HEIGHT)
        .saturating_add(footer_height)
        .saturating_add(MIN_TABLE_ROWS);
    let (summary, summary_height) = if height >= needed {
        (SummaryMode::Full { phase_rows }, full_height)
    } else {
        (SummaryMode::Compact, height.min(1))
    };

    let table_header_row = summary_height;
    let table_start_row = table_header_row.saturating_add(TABLE_CHROME_HEIGHT);
    // The footer only goes below the table chrome, never over it.
    if table_start_row.saturating_add(footer_height) > height {
        footer_height = 0;
    }
    let footer = (footer_height > 0).then(|| Footer {
        rule_row: height - 3,
        status_row: height - 2,
        legend_row: height - 1,
    });
    let visible_rows = height
        .saturating_sub(table_start_row)
        .saturating_sub(footer_height);

    ScreenLayout {
        width,
        height,
        summary,
        summary_height,
        columns: Columns::for_width(width),
        table_header_row,
        table_start_row,
        visible_rows,
        footer,
    }
}
