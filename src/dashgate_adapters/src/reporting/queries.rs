//! SQL for the dashboard aggregates.
//!
//! Aliases are quoted so the JSON keys keep the casing the front-end reads.
//! Product labels are matched verbatim, misspellings included, because they
//! are the values stored in the data tables.

use dashgate_core::Report;

const MAIN_ADVANCE_PRODUCTS: &[(&str, &str)] = &[
    ("Micro Fianance Loan", "MicroFinanceLoan"),
    ("Gold Loan", "GoldLoan"),
    ("Business Loan", "BusinessLoan"),
    ("Clean Energy Loan", "CleanEnergyLoan"),
    ("Mortgage Loan", "MortgageLoan"),
    ("Term Loan", "TermLoan"),
    ("Loan Against Deposit", "LoanAgainstDepo"),
    ("Loan Against Property", "LoanAgainstProperty"),
    ("Auto loan", "AutoLoan"),
    ("Personal Loan", "PersonalLoan"),
    ("CC OD Loan", "CcOdLoan"),
    ("Agri Loan", "AgriLoan"),
    ("KCC Loan", "KccLoan"),
];

const SUB_ADVANCE_PRODUCTS: &[(&str, &str)] = &[("Agri Loan", "AgriLoan")];

const MAIN_DEPOSIT_PRODUCTS: &[(&str, &str)] = &[
    ("CA_Retail", "CARetail"),
    ("CA_NRI", "CANRI"),
    ("SA_MB", "SAMB"),
    ("SA_Retail", "SARetail"),
    ("SA_NRI", "SANRI"),
    ("TDA_MB", "TDAMB"),
];

const SUB_DEPOSIT_PRODUCTS: &[(&str, &str)] = &[
    ("Current account basic", "CurrentBasic"),
    ("Current account classic", "CurrentClassic"),
    ("CA Premium with sweep", "CAPrewithSwee"),
    ("Basic agent", "basicAgent"),
    ("Escrow account", "EscrowAccount"),
    ("CA Premium without sweep", "CAPrewithoutSwee"),
    ("CA Diamond without sweep", "CADiawithoutSwee"),
    ("CAA NRE", "CAANRE"),
    ("CA NRO", "CANRO"),
    ("SB Lalith", "SBlalith"),
    ("SB Mahila", "SBmahila"),
    ("SB Regular", "SBregular"),
    ("SB Senior citizen", "SBsenior"),
    ("SB Premium with sweep(Expired)", "SBPrewithSweeExp"),
    ("SB Premium without sweep", "SBPrewithoutSwee"),
    ("SB TASC", "SBTASC"),
    ("SB Student", "SBstu"),
    ("SB Salary account", "SBsalAcc"),
    ("SB Staff", "SBstaff"),
    ("SB Lalith Plus", "SBlalithplus"),
    ("SB Zero balance", "SBzeroBal"),
    ("SB Krishak bandhu", "SBkriBan"),
    ("525-SB Salary standard", "525SBsalStan"),
    ("SB NRE", "SBNRE"),
    ("SB NRO", "SBNRO"),
    ("SB NRE Prem sweep(Expired)", "SBNREpremsweeexp"),
    ("SB NRE Prem without sweep", "SBNREpremwithoutswee"),
    ("Recurring deposit weekly", "RecurDepoWee"),
];

/// Customer head counts for one reporting period.
struct CustomerPeriod {
    /// Appended to every output key, e.g. `maleSumPrevY`.
    key_suffix: &'static str,
    column_suffix: &'static str,
    non_individual_column: &'static str,
}

const FTD: CustomerPeriod = CustomerPeriod {
    key_suffix: "",
    column_suffix: "ftd",
    non_individual_column: "non_individual_cnt_ftd",
};

const PREVIOUS_FY: CustomerPeriod = CustomerPeriod {
    key_suffix: "PrevY",
    column_suffix: "prev_fy",
    non_individual_column: "non_individual_prev_fy",
};

const NEW_FY: CustomerPeriod = CustomerPeriod {
    key_suffix: "New",
    column_suffix: "new_fy",
    non_individual_column: "non_individual_new_fy",
};

pub(super) fn sql(report: Report) -> String {
    match report {
        Report::TotalDeposit => {
            r#"SELECT SUM(os_ftd) AS "deposit_total" FROM deposit_data"#.to_string()
        }
        Report::TotalAdvance => {
            r#"SELECT SUM(os_ftd) AS "advance_total" FROM advance_data"#.to_string()
        }
        Report::TotalBusiness => r#"SELECT ((SELECT SUM(os_ftd) FROM deposit_data) + (SELECT SUM(os_ftd) FROM advance_data)) AS "total_business""#.to_string(),
        Report::CustomerSum => customer_sums(&FTD),
        Report::CustomerSumPrevYear => customer_sums(&PREVIOUS_FY),
        Report::CustomerSumNew => customer_sums(&NEW_FY),
        Report::MainProductAdvanceSum => {
            product_sums("advance_data", "product_grping", MAIN_ADVANCE_PRODUCTS)
        }
        Report::SubProductAdvanceSum => {
            product_sums("advance_data", "product_grping", SUB_ADVANCE_PRODUCTS)
        }
        Report::MainProductDepositSum => {
            product_sums("deposit_data", "product_grping", MAIN_DEPOSIT_PRODUCTS)
        }
        Report::SubProductDepositSum => {
            product_sums("deposit_data", "prod_typ_desc", SUB_DEPOSIT_PRODUCTS)
        }
    }
}

fn customer_sums(period: &CustomerPeriod) -> String {
    let CustomerPeriod {
        key_suffix: k,
        column_suffix: c,
        non_individual_column: ni,
    } = period;

    format!(
        r#"SELECT SUM(cust_male_cnt_{c}) AS "maleSum{k}", SUM(cust_female_cnt_{c}) AS "femaleSum{k}", SUM(cust_oth_cnt_{c}) AS "otherSum{k}", SUM({ni}) AS "nonIndividualSum{k}", SUM(sr_citizen_cif_{c}) AS "srSum{k}", SUM(nri_cif_{c}) AS "NriSum{k}", SUM(mbcust_cif_{c}) AS "MbSum{k}", SUM(cust_male_cnt_{c}) + SUM(cust_female_cnt_{c}) + SUM(cust_oth_cnt_{c}) + SUM({ni}) AS "totalSum{k}" FROM customer_data"#
    )
}

/// Count and outstanding columns per product label.
fn product_sums(table: &str, group_column: &str, products: &[(&str, &str)]) -> String {
    let columns = products
        .iter()
        .map(|(label, key)| {
            format!(
                r#"SUM(CASE WHEN {group_column} = '{label}' THEN cnt_ftd ELSE 0 END) AS "{key}Cnt", SUM(CASE WHEN {group_column} = '{label}' THEN os_ftd ELSE 0 END) AS "{key}Os""#
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("SELECT {columns} FROM {table}")
}
