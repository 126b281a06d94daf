//! Canonical column names of the flat declaration table.
//!
//! The importer emits these names for the fields the engine cares about;
//! every other tag in a declaration document becomes a column named after
//! the tag itself. The spelling follows the original exporter so that
//! tables round-trip cleanly against existing spreadsheets.

/// Synthetic row identifier, assigned at import, unique per dataset.
pub const ROW_ID: &str = "row_id";
/// Name of the XML file a row was imported from.
pub const SOURCE_FILE: &str = "Kaynak_Dosya";

/// Declaration number.
pub const DECLARATION_NO: &str = "Beyanname_no";
/// Line-item number within a declaration.
pub const ITEM_NO: &str = "Kalem_No";
/// GTIP tariff classification code.
pub const GTIP: &str = "Gtip";
/// Origin country code.
pub const ORIGIN_COUNTRY: &str = "Mensei_ulke";
/// Customs regime code.
pub const REGIME: &str = "Rejim";
/// Commercial description of the goods.
pub const COMMERCIAL_DESCRIPTION: &str = "Ticari_tanimi";

/// Gross weight of the line item.
pub const GROSS_WEIGHT: &str = "Brut_agirlik";
/// Net weight of the line item.
pub const NET_WEIGHT: &str = "Net_agirlik";

/// Declared invoice amount.
pub const INVOICE_AMOUNT: &str = "Fatura_miktari";
/// Currency code of the invoice amount.
pub const INVOICE_CURRENCY: &str = "Fatura_miktarinin_dovizi";

/// Declared tax rate (percent).
pub const TAX_RATE: &str = "Vergi_orani";
/// Tax base amount.
pub const TAX_BASE: &str = "Vergi_matrahi";
/// Declared tax figure.
pub const TAX_DECLARED: &str = "Vergi_miktari";
