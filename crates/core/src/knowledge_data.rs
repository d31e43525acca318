//! Static battery knowledge dataset.

use crate::knowledge::{KnowledgeBase, Material, Patent, Process, Standard};

/// Process-wide, read-only knowledge dataset.
pub static KNOWLEDGE_BASE: KnowledgeBase = KnowledgeBase {
    materials: MATERIALS,
    processes: PROCESSES,
    standards: STANDARDS,
    patents: PATENTS,
};

const MATERIALS: &[Material] = &[
    Material {
        id: "ncm811",
        name: "NCM811",
        full_name: "镍钴锰三元材料（Ni:Co:Mn = 8:1:1）",
        description: "高镍三元正极材料，能量密度高但热稳定性相对较低",
        energy_density: Some("220-260 Wh/kg"),
        capacity: None,
        cycle_life: "≥1500 cycles",
        patent_status: "高风险",
        alternatives: &["NCM622", "NCA", "磷酸铁锂"],
        standards: &["GB38031-2025", "GB/T 31484-2015"],
    },
    Material {
        id: "lfp",
        name: "磷酸铁锂（LFP）",
        full_name: "LiFePO₄",
        description: "橄榄石结构正极材料，安全性高，循环寿命长",
        energy_density: Some("140-160 Wh/kg"),
        capacity: None,
        cycle_life: "≥3000 cycles",
        patent_status: "低风险（专利已过期）",
        alternatives: &["磷酸锰铁锂", "三元材料"],
        standards: &["GB/T 30835-2014"],
    },
    Material {
        id: "silicon-carbon",
        name: "硅碳负极",
        full_name: "硅碳复合负极材料",
        description: "高容量负极材料，但存在膨胀问题",
        energy_density: None,
        capacity: Some("≥500 mAh/g"),
        cycle_life: "≥500 cycles",
        patent_status: "中风险",
        alternatives: &["石墨", "硬碳", "钛酸锂"],
        standards: &["GB/T 30836-2014"],
    },
];

const PROCESSES: &[Process] = &[
    Process {
        id: "dry-electrode",
        name: "干法电极",
        description: "不使用溶剂的电极制备工艺，环保且能量密度高",
        advantages: &["无溶剂污染", "能量密度高", "成本低"],
        disadvantages: &["工艺控制要求高", "专利限制多"],
        patent_status: "中高风险",
        alternatives: &["湿法涂布", "挤出涂布"],
    },
    Process {
        id: "pre-lithiation",
        name: "预锂化",
        description: "预先补偿锂损失的工艺技术",
        advantages: &["提升首次效率", "延长循环寿命"],
        disadvantages: &["工艺复杂", "成本增加"],
        patent_status: "中等风险",
        alternatives: &["负极补锂", "正极补锂"],
    },
];

const STANDARDS: &[Standard] = &[
    Standard {
        id: "gb38031-2025",
        name: "GB38031-2025",
        full_name: "电动汽车用动力蓄电池安全要求",
        effective_date: "2026-07-01",
        key_requirements: &[
            "热扩散测试观察时间≥2小时",
            "新增电池包底部撞击测试",
            "加强防篡改设计要求",
            "完善BMS安全标准",
        ],
        testing_methods: Some(&[
            "单体热失控触发测试",
            "过充保护测试",
            "短路安全测试",
            "机械冲击测试",
        ]),
    },
    Standard {
        id: "gb/t-31484-2015",
        name: "GB/T 31484-2015",
        full_name: "电动汽车用动力蓄电池循环寿命要求及试验方法",
        effective_date: "2015-05-15",
        key_requirements: &[
            "循环寿命≥1000次（容量保持率≥80%）",
            "不同温度下的循环性能",
            "存储性能要求",
        ],
        testing_methods: None,
    },
];

const PATENTS: &[Patent] = &[
    Patent {
        id: "cn201810123456",
        number: "CN201810123456.7",
        title: "高镍三元正极材料及其制备方法",
        assignee: "松下电器产业株式会社",
        filing_date: "2018-01-15",
        expiration_date: "2038-01-14",
        status: "有效",
        risk_level: "高",
        claims: "保护Ni含量≥85%的三元正极材料",
    },
    Patent {
        id: "cn201910987654",
        number: "CN201910987654.3",
        title: "硅碳复合负极材料及其制备方法",
        assignee: "三星SDI株式会社",
        filing_date: "2019-03-20",
        expiration_date: "2039-03-19",
        status: "有效",
        risk_level: "中",
        claims: "保护硅含量>30%的硅碳复合材料",
    },
    Patent {
        id: "us2020123456",
        number: "US2020123456A1",
        title: "干法电极制造工艺",
        assignee: "Maxwell Technologies Inc.",
        filing_date: "2020-01-10",
        expiration_date: "2040-01-09",
        status: "有效",
        risk_level: "中",
        claims: "保护特定干法电极工艺参数",
    },
];
