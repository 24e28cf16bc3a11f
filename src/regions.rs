//! Embedded catalog of quiz regions.
//!
//! One entry per province-level division, keyed by its adcode so the client
//! can look up the matching outline in its own map data. Geometry never
//! passes through the backend.

/// A quizzable region: national standard adcode plus display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub adcode: u32,
    pub name: &'static str,
}

/// 省级行政区划（与前端地图数据的 adcode 一致）
pub const REGIONS: &[Region] = &[
    Region { adcode: 110000, name: "北京市" },
    Region { adcode: 120000, name: "天津市" },
    Region { adcode: 130000, name: "河北省" },
    Region { adcode: 140000, name: "山西省" },
    Region { adcode: 150000, name: "内蒙古自治区" },
    Region { adcode: 210000, name: "辽宁省" },
    Region { adcode: 220000, name: "吉林省" },
    Region { adcode: 230000, name: "黑龙江省" },
    Region { adcode: 310000, name: "上海市" },
    Region { adcode: 320000, name: "江苏省" },
    Region { adcode: 330000, name: "浙江省" },
    Region { adcode: 340000, name: "安徽省" },
    Region { adcode: 350000, name: "福建省" },
    Region { adcode: 360000, name: "江西省" },
    Region { adcode: 370000, name: "山东省" },
    Region { adcode: 410000, name: "河南省" },
    Region { adcode: 420000, name: "湖北省" },
    Region { adcode: 430000, name: "湖南省" },
    Region { adcode: 440000, name: "广东省" },
    Region { adcode: 450000, name: "广西壮族自治区" },
    Region { adcode: 460000, name: "海南省" },
    Region { adcode: 500000, name: "重庆市" },
    Region { adcode: 510000, name: "四川省" },
    Region { adcode: 520000, name: "贵州省" },
    Region { adcode: 530000, name: "云南省" },
    Region { adcode: 540000, name: "西藏自治区" },
    Region { adcode: 610000, name: "陕西省" },
    Region { adcode: 620000, name: "甘肃省" },
    Region { adcode: 630000, name: "青海省" },
    Region { adcode: 640000, name: "宁夏回族自治区" },
    Region { adcode: 650000, name: "新疆维吾尔自治区" },
    Region { adcode: 710000, name: "台湾省" },
    Region { adcode: 810000, name: "香港特别行政区" },
    Region { adcode: 820000, name: "澳门特别行政区" },
];

pub fn by_adcode(adcode: u32) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.adcode == adcode)
}
