//! Static regional and structural coefficient tables
//!
//! Every lookup has a documented fallback. A region or building type that is
//! not in the table resolves to the default, never to an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Unit price for regions missing from the table (lowest tier, 10k per ping)
pub const DEFAULT_UNIT_PRICE: f64 = 10.0;

/// Annual growth rate for regions missing from the table
pub const DEFAULT_ANNUAL_GROWTH: f64 = 0.035;

/// Parking premium for regions without a dedicated entry
pub const DEFAULT_PARKING_PREMIUM: Decimal = dec!(500000);

/// Multiplier for building types missing from the table
pub const DEFAULT_BUILDING_MULTIPLIER: f64 = 1.0;

/// Demand term for building types missing from the table
pub const DEFAULT_DEMAND_FACTOR: f64 = 0.0;

/// Currency units per quoted unit price (prices are quoted per 10k)
pub const UNIT_SCALE: f64 = 10_000.0;

/// Supported regions (Taiwan's 22 counties and cities)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Taipei,
    NewTaipei,
    Taoyuan,
    Taichung,
    Tainan,
    Kaohsiung,
    HsinchuCity,
    HsinchuCounty,
    Keelung,
    Miaoli,
    Changhua,
    Nantou,
    Yunlin,
    ChiayiCity,
    ChiayiCounty,
    Pingtung,
    Yilan,
    Hualien,
    Taitung,
    Penghu,
    Kinmen,
    Lienchiang,
}

impl Region {
    /// All regions in table order
    pub const ALL: [Region; 22] = [
        Region::Taipei,
        Region::NewTaipei,
        Region::Taoyuan,
        Region::Taichung,
        Region::Tainan,
        Region::Kaohsiung,
        Region::HsinchuCity,
        Region::HsinchuCounty,
        Region::Keelung,
        Region::Miaoli,
        Region::Changhua,
        Region::Nantou,
        Region::Yunlin,
        Region::ChiayiCity,
        Region::ChiayiCounty,
        Region::Pingtung,
        Region::Yilan,
        Region::Hualien,
        Region::Taitung,
        Region::Penghu,
        Region::Kinmen,
        Region::Lienchiang,
    ];

    /// Resolve a free-text region name.
    ///
    /// Surrounding whitespace is ignored and 臺 is treated as 台.
    /// Returns `None` for anything not in the table.
    pub fn lookup(name: &str) -> Option<Region> {
        let normalized = name.trim().replace('臺', "台");
        Self::ALL.into_iter().find(|r| r.label() == normalized)
    }

    /// Canonical name as it appears in requests
    pub fn label(self) -> &'static str {
        match self {
            Region::Taipei => "台北市",
            Region::NewTaipei => "新北市",
            Region::Taoyuan => "桃園市",
            Region::Taichung => "台中市",
            Region::Tainan => "台南市",
            Region::Kaohsiung => "高雄市",
            Region::HsinchuCity => "新竹市",
            Region::HsinchuCounty => "新竹縣",
            Region::Keelung => "基隆市",
            Region::Miaoli => "苗栗縣",
            Region::Changhua => "彰化縣",
            Region::Nantou => "南投縣",
            Region::Yunlin => "雲林縣",
            Region::ChiayiCity => "嘉義市",
            Region::ChiayiCounty => "嘉義縣",
            Region::Pingtung => "屏東縣",
            Region::Yilan => "宜蘭縣",
            Region::Hualien => "花蓮縣",
            Region::Taitung => "台東縣",
            Region::Penghu => "澎湖縣",
            Region::Kinmen => "金門縣",
            Region::Lienchiang => "連江縣",
        }
    }

    /// Tower unit price in 10k currency units per ping
    pub fn unit_price(self) -> f64 {
        match self {
            Region::Taipei => 160.0,
            Region::NewTaipei => 65.0,
            Region::Taoyuan => 35.0,
            Region::Taichung => 42.0,
            Region::Tainan => 30.0,
            Region::Kaohsiung => 28.0,
            Region::HsinchuCity => 45.0,
            Region::HsinchuCounty => 32.0,
            Region::Keelung => 22.0,
            Region::Miaoli => 16.0,
            Region::Changhua => 18.0,
            Region::Nantou => 12.0,
            Region::Yunlin => 12.0,
            Region::ChiayiCity => 18.0,
            Region::ChiayiCounty => 14.0,
            Region::Pingtung => 14.0,
            Region::Yilan => 20.0,
            Region::Hualien => 18.0,
            Region::Taitung => 10.0,
            Region::Penghu => 12.0,
            Region::Kinmen => 11.0,
            Region::Lienchiang => 10.0,
        }
    }

    /// Annualized house price growth used by the market and sentiment stages
    pub fn annual_growth(self) -> f64 {
        match self {
            Region::Taipei => 0.045,
            Region::NewTaipei => 0.052,
            Region::Taoyuan => 0.060,
            Region::Taichung => 0.058,
            Region::Tainan => 0.055,
            Region::Kaohsiung => 0.053,
            Region::HsinchuCity => 0.062,
            Region::HsinchuCounty => 0.058,
            Region::Keelung => 0.040,
            Region::Miaoli => 0.030,
            Region::Changhua => 0.033,
            Region::Nantou => 0.025,
            Region::Yunlin => 0.025,
            Region::ChiayiCity => 0.038,
            Region::ChiayiCounty => 0.028,
            Region::Pingtung => 0.030,
            Region::Yilan => 0.042,
            Region::Hualien => 0.038,
            Region::Taitung => 0.028,
            Region::Penghu => 0.025,
            Region::Kinmen => 0.022,
            Region::Lienchiang => 0.020,
        }
    }

    /// Dedicated parking premium, if the region has one
    pub fn parking_premium(self) -> Option<Decimal> {
        match self {
            Region::Taipei => Some(dec!(3000000)),
            Region::NewTaipei => Some(dec!(1500000)),
            Region::HsinchuCity => Some(dec!(1200000)),
            Region::Taoyuan | Region::Taichung => Some(dec!(1000000)),
            Region::Tainan | Region::Kaohsiung => Some(dec!(800000)),
            _ => None,
        }
    }
}

/// Building categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// 大樓: elevator tower, the pricing baseline
    Tower,
    /// 華廈: mid-rise with elevator
    MidRise,
    /// 公寓: walk-up apartment
    WalkUp,
    /// 透天: townhouse
    Townhouse,
    /// 別墅: villa
    Villa,
}

impl BuildingType {
    pub const ALL: [BuildingType; 5] = [
        BuildingType::Tower,
        BuildingType::MidRise,
        BuildingType::WalkUp,
        BuildingType::Townhouse,
        BuildingType::Villa,
    ];

    /// Resolve a building category label, `None` if unknown
    pub fn lookup(label: &str) -> Option<BuildingType> {
        let label = label.trim();
        Self::ALL.into_iter().find(|b| b.label() == label)
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildingType::Tower => "大樓",
            BuildingType::MidRise => "華廈",
            BuildingType::WalkUp => "公寓",
            BuildingType::Townhouse => "透天",
            BuildingType::Villa => "別墅",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            BuildingType::Tower => 1.00,
            BuildingType::MidRise => 0.95,
            BuildingType::WalkUp => 0.88,
            BuildingType::Townhouse => 0.90,
            BuildingType::Villa => 1.10,
        }
    }

    /// Market demand term fed into the sentiment score
    pub fn demand_factor(self) -> f64 {
        match self {
            BuildingType::Tower => 0.10,
            BuildingType::MidRise => 0.05,
            BuildingType::WalkUp => 0.00,
            BuildingType::Townhouse => -0.05,
            BuildingType::Villa => -0.02,
        }
    }

    /// Low-rise categories where the floor number carries no premium
    pub fn is_floor_exempt(self) -> bool {
        matches!(self, BuildingType::Townhouse | BuildingType::Villa)
    }
}

/// Unit price for a region name, falling back to the lowest tier
pub fn unit_price(region: &str) -> f64 {
    Region::lookup(region).map_or(DEFAULT_UNIT_PRICE, Region::unit_price)
}

/// Annual growth rate for a region name, falling back to the global default
pub fn annual_growth(region: &str) -> f64 {
    Region::lookup(region).map_or(DEFAULT_ANNUAL_GROWTH, Region::annual_growth)
}

/// Parking premium for a region name, falling back to the flat default
pub fn parking_premium(region: &str) -> Decimal {
    Region::lookup(region)
        .and_then(Region::parking_premium)
        .unwrap_or(DEFAULT_PARKING_PREMIUM)
}

/// Building multiplier for a category label, 1.0 when unknown
pub fn building_multiplier(building_type: &str) -> f64 {
    BuildingType::lookup(building_type).map_or(DEFAULT_BUILDING_MULTIPLIER, BuildingType::multiplier)
}

/// Demand term for a category label, neutral when unknown
pub fn demand_factor(building_type: &str) -> f64 {
    BuildingType::lookup(building_type).map_or(DEFAULT_DEMAND_FACTOR, BuildingType::demand_factor)
}
