use std::fmt;

/// Read-only dashboard aggregates served next to the credential routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    TotalDeposit,
    TotalAdvance,
    TotalBusiness,
    CustomerSum,
    CustomerSumPrevYear,
    CustomerSumNew,
    MainProductAdvanceSum,
    SubProductAdvanceSum,
    MainProductDepositSum,
    SubProductDepositSum,
}

/// How a report's result set is returned to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportShape {
    /// JSON array of every row.
    Rows,
    /// The first row as a JSON object.
    SingleRow,
}

impl Report {
    pub const ALL: [Report; 10] = [
        Report::TotalDeposit,
        Report::TotalAdvance,
        Report::TotalBusiness,
        Report::CustomerSum,
        Report::CustomerSumPrevYear,
        Report::CustomerSumNew,
        Report::MainProductAdvanceSum,
        Report::SubProductAdvanceSum,
        Report::MainProductDepositSum,
        Report::SubProductDepositSum,
    ];

    /// Route path, as the dashboard front-end requests it.
    pub fn path(self) -> &'static str {
        match self {
            Report::TotalDeposit => "/totaldeposit",
            Report::TotalAdvance => "/totalAdvance",
            Report::TotalBusiness => "/totalBusiness",
            Report::CustomerSum => "/customerSum",
            Report::CustomerSumPrevYear => "/customerSumPrevY",
            Report::CustomerSumNew => "/customerSumNew",
            Report::MainProductAdvanceSum => "/mainProductAdvanceSum",
            Report::SubProductAdvanceSum => "/subProductAdvanceSum",
            Report::MainProductDepositSum => "/mainProductDepositSum",
            Report::SubProductDepositSum => "/subProductDepositSum",
        }
    }

    pub fn shape(self) -> ReportShape {
        match self {
            Report::TotalDeposit | Report::TotalAdvance | Report::TotalBusiness => ReportShape::Rows,
            _ => ReportShape::SingleRow,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}
