//! Static rule tables for the heuristic analyzers
//!
//! Tables are ordered: the classifier keeps the first best category and chat
//! routing stops at the first matching topic.

use once_cell::sync::Lazy;
use regex::Regex;

/// Content category with weighted keywords and boosting patterns
#[derive(Debug)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub patterns: Vec<Regex>,
    pub weight: f64,
}

/// Tag category and the candidate tags it unlocks
#[derive(Debug)]
pub struct TagCategory {
    pub name: &'static str,
    pub tags: &'static [&'static str],
    pub patterns: Vec<Regex>,
}

/// Chat topic with canned reply lines
#[derive(Debug, Clone, Copy)]
pub struct ChatTopic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub responses: &'static [&'static str],
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

fn category(
    name: &'static str,
    keywords: &'static [&'static str],
    patterns: &[&str],
) -> CategoryRule {
    CategoryRule {
        name,
        keywords,
        patterns: compile(patterns),
        weight: 1.0,
    }
}

fn tag_category(name: &'static str, tags: &'static [&'static str], patterns: &[&str]) -> TagCategory {
    TagCategory {
        name,
        tags,
        patterns: compile(patterns),
    }
}

/// Category returned when nothing scores
pub const FALLBACK_CATEGORY: &str = "其他";

pub static CONTENT_CATEGORIES: Lazy<Vec<CategoryRule>> = Lazy::new(|| {
    vec![
        category(
            "校园新闻",
            &["开学", "典礼", "活动", "校园", "学生", "新学期", "毕业", "入学"],
            &["开学典礼", "校园活动", "学生.*活动", "新学期"],
        ),
        category(
            "学术成就",
            &["竞赛", "获奖", "成绩", "考试", "学术", "奖项", "比赛", "优异"],
            &["获得.*奖", "竞赛.*成绩", "学术.*成果", "考试.*优异"],
        ),
        category(
            "国际交流",
            &["国际", "交流", "合作", "海外", "留学", "外教", "姐妹学校", "访问"],
            &["国际.*交流", "海外.*项目", "外国.*学校", "国际.*合作"],
        ),
        category(
            "招生信息",
            &["招生", "报名", "入学", "录取", "申请", "招收", "名额"],
            &["招生.*简章", "报名.*流程", "入学.*要求", "录取.*通知"],
        ),
        category(
            "师资介绍",
            &["教师", "老师", "师资", "教授", "教学", "名师", "教育"],
            &["教师.*介绍", "师资.*力量", "名师.*风采", "教学.*团队"],
        ),
        category(
            "课程介绍",
            &["课程", "教学", "学科", "专业", "科目", "课堂", "教材"],
            &["课程.*设置", "教学.*内容", "学科.*建设", "专业.*介绍"],
        ),
        category(
            "校园设施",
            &["设施", "建设", "图书馆", "实验室", "体育馆", "宿舍", "食堂"],
            &["设施.*建设", "校园.*环境", "硬件.*设备", "基础.*设施"],
        ),
        category(
            "科技创新",
            &["科技", "创新", "发明", "专利", "研发", "技术", "智能"],
            &["科技.*创新", "技术.*研发", "创新.*项目", "智能.*系统"],
        ),
    ]
});

pub static TAG_CATEGORIES: Lazy<Vec<TagCategory>> = Lazy::new(|| {
    vec![
        tag_category(
            "教育类",
            &["教育", "学习", "教学", "培养", "素质教育", "全面发展"],
            &["教育", "学习", "教学", "培养"],
        ),
        tag_category(
            "学校类",
            &["学校", "校园", "齐鲁", "国际学校", "校园生活", "学校文化"],
            &["学校", "校园", "齐鲁", "国际"],
        ),
        tag_category(
            "学生类",
            &["学生", "同学", "青少年", "学子", "学生活动", "学生成长"],
            &["学生", "同学", "青少年", "学子"],
        ),
        tag_category(
            "教师类",
            &["教师", "老师", "师资", "教授", "名师", "教学团队"],
            &["教师", "老师", "师资", "教授"],
        ),
        tag_category(
            "课程类",
            &["课程", "学科", "专业", "科目", "课堂", "教材", "课程体系"],
            &["课程", "学科", "专业", "科目"],
        ),
        tag_category(
            "活动类",
            &["活动", "比赛", "竞赛", "表演", "展示", "交流", "实践"],
            &["活动", "比赛", "竞赛", "表演", "展示"],
        ),
        tag_category(
            "成就类",
            &["获奖", "成绩", "优秀", "杰出", "卓越", "成就", "荣誉"],
            &["获奖", "成绩", "优秀", "杰出", "卓越"],
        ),
        tag_category(
            "国际类",
            &["国际", "海外", "留学", "交流", "合作", "全球", "世界"],
            &["国际", "海外", "留学", "交流", "合作"],
        ),
        tag_category(
            "科技类",
            &["科技", "创新", "技术", "智能", "AI", "数字化", "现代化"],
            &["科技", "创新", "技术", "智能", "AI", "数字"],
        ),
        tag_category(
            "招生类",
            &["招生", "报名", "入学", "录取", "申请", "招收"],
            &["招生", "报名", "入学", "录取", "申请"],
        ),
    ]
});

/// Words that reinforce a candidate tag
pub const RELATED_WORDS: &[(&str, &[&str])] = &[
    ("教育", &["培养", "教学", "育人", "成长"]),
    ("学生", &["同学", "学子", "青少年", "孩子"]),
    ("教师", &["老师", "教授", "导师", "教员"]),
    ("课程", &["学科", "科目", "专业", "教材"]),
    ("活动", &["比赛", "竞赛", "表演", "实践"]),
    ("国际", &["海外", "全球", "世界", "跨国"]),
    ("科技", &["技术", "创新", "智能", "现代"]),
];

pub fn related_words(tag: &str) -> &'static [&'static str] {
    RELATED_WORDS
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}

/// Keywords that lift a sentence's summary score
pub const SUMMARY_KEYWORDS: &[&str] = &[
    "学校", "学生", "教育", "课程", "教师", "国际", "优秀", "成绩", "活动", "发展",
];

pub const HOTLINE: &str = "400-123-4567";
pub const CONTACT_EMAIL: &str = "info@qilu.edu.cn";

pub const CHAT_TOPICS: &[ChatTopic] = &[
    ChatTopic {
        name: "招生",
        keywords: &["招生", "报名", "入学", "申请", "录取"],
        responses: &[
            "我校全年招生，欢迎优秀学子加入齐鲁国际学校大家庭！",
            "招生流程：在线申请 → 材料审核 → 入学测试 → 面试 → 录取通知",
            "具体招生信息请查看招生简章或联系招生办：400-123-4567",
        ],
    },
    ChatTopic {
        name: "学费",
        keywords: &["学费", "费用", "收费", "价格", "多少钱"],
        responses: &[
            "我校学费根据年级不同有所差异：",
            "小学部：每年3.8万元",
            "初中部：每年4.5万元",
            "高中部：每年5.2万元",
            "详细收费标准请咨询招生办公室：400-123-4567",
        ],
    },
    ChatTopic {
        name: "课程",
        keywords: &["课程", "教学", "学科", "专业", "科目"],
        responses: &[
            "我校开设丰富多样的课程体系：",
            "• 基础学科：语文、数学、英语、物理、化学、生物等",
            "• 特色课程：STEM教育、艺术课程、体育课程",
            "• 国际课程：AP课程、A-Level课程、IB课程",
            "满足不同学生的学习需求和发展方向",
        ],
    },
    ChatTopic {
        name: "师资",
        keywords: &["师资", "老师", "教师", "教授", "教学团队"],
        responses: &[
            "我校拥有一支高素质的教师队伍：",
            "• 200+优秀教师，师生比1:8",
            "• 80%教师具有硕士以上学历",
            "• 30%教师具有海外留学背景",
            "• 多名教师获得省市级教学能手称号",
        ],
    },
    ChatTopic {
        name: "设施",
        keywords: &["设施", "环境", "校园", "硬件", "条件"],
        responses: &[
            "我校拥有现代化的教学设施：",
            "• 智能化教室配备先进多媒体设备",
            "• 实验室、图书馆、体育馆一应俱全",
            "• 学生宿舍温馨舒适，24小时安保",
            "• 绿化覆盖率达60%，环境优美",
        ],
    },
    ChatTopic {
        name: "地址",
        keywords: &["地址", "位置", "在哪", "怎么去", "交通"],
        responses: &[
            "学校地址：山东省济南市历下区齐鲁大道123号",
            "交通便利：",
            "• 地铁：3号线齐鲁站A出口步行5分钟",
            "• 公交：多路公交直达",
            "• 自驾：济青高速齐鲁出口",
            "欢迎预约参观校园！",
        ],
    },
    ChatTopic {
        name: "联系",
        keywords: &["联系", "电话", "咨询", "客服", "邮箱"],
        responses: &[
            "联系方式：",
            "📞 招生热线：400-123-4567",
            "📧 邮箱：info@qilu.edu.cn",
            "🕐 工作时间：周一至周五 9:00-17:00",
            "💬 在线咨询：官网客服（24小时）",
        ],
    },
];

pub const GENERIC_REPLY: &[&str] = &[
    "感谢您对齐鲁国际学校的关注！",
    "如需了解更多信息，请：",
    "📞 拨打招生热线：400-123-4567",
    "📧 发送邮件至：info@qilu.edu.cn",
    "🌐 访问官网了解详情",
    "我们的专业顾问会为您详细解答！",
];

/// Reply used when the chat operation itself fails
pub const CHAT_FAILURE_REPLY: &str = "抱歉，我暂时无法回答您的问题，请稍后再试或联系人工客服。";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_compile_and_keep_order() {
        let names: Vec<&str> = CONTENT_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "校园新闻", "学术成就", "国际交流", "招生信息", "师资介绍", "课程介绍", "校园设施",
                "科技创新"
            ]
        );
        assert!(CONTENT_CATEGORIES.iter().all(|c| c.weight == 1.0));
        assert_eq!(TAG_CATEGORIES.len(), 10);
        assert_eq!(TAG_CATEGORIES[8].name, "科技类");
    }

    #[test]
    fn test_related_words() {
        assert_eq!(related_words("教师"), &["老师", "教授", "导师", "教员"]);
        assert!(related_words("荣誉").is_empty());
    }

    #[test]
    fn test_chat_topics_mention_contacts() {
        let order: Vec<&str> = CHAT_TOPICS.iter().map(|t| t.name).collect();
        assert_eq!(order, vec!["招生", "学费", "课程", "师资", "设施", "地址", "联系"]);
        assert!(GENERIC_REPLY.iter().any(|l| l.contains(HOTLINE)));
        assert!(GENERIC_REPLY.iter().any(|l| l.contains(CONTACT_EMAIL)));
    }
}
