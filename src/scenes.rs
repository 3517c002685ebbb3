use crate::models::SceneBucket;

pub const QUOTES_PER_BUCKET: usize = 5;

/// How a bucket is themed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeScene {
    pub id: &'static str,
    pub title: &'static str,
    pub text: &'static str,
    pub long_text: &'static str,
    pub icon: &'static str,
    /// Top, middle and bottom stops of the background gradient.
    pub palette: [&'static str; 3],
}

const MORNING_QUOTES: [&str; QUOTES_PER_BUCKET] = [
    "每一个清晨都是新的起点，让我们以饱满的热情开启今天！",
    "黎明前的黑暗最为深邃，但朝阳终将升起，照亮我们的征程。",
    "生命的意义不在于活了多久，而在于如何让每一天都熠熠生辉。",
    "今天的付出，是为了让明天的自己更加出彩。",
    "用阳光的心态，迎接每一个挑战，让生命绽放异彩。",
];

const NOON_QUOTES: [&str; QUOTES_PER_BUCKET] = [
    "困难来临时，请记住：你比想象中更加坚强！",
    "生命如同马拉松，重要的不是速度，而是坚持的信念。",
    "每一个平凡的日子，都是通向非凡人生的基石。",
    "把握当下，成就非凡，让每一刻都充满意义。",
    "生命的长度无法改变，但宽度和深度可以由我们来谱写。",
];

const EVENING_QUOTES: [&str; QUOTES_PER_BUCKET] = [
    "夕阳西下，带走的是时光，留下的是成长与感悟。",
    "回首今日，感恩所得；展望明天，继续前行。",
    "生命的旅程中，每一个脚印都是成长的见证。",
    "让今天的努力，成为明天的骄傲。",
    "静谧的夜晚，让我们沉淀收获，蓄力明天。",
];

const MORNING_SCENE: LifeScene = LifeScene {
    id: "morning",
    title: "晨曦初现",
    text: "当朝阳初升，新的一天开始。今天的你，将创造怎样的传奇？",
    long_text: "用生命的温度，握紧生活的残酷！用拼搏的脉搏，跳跃现实的荒芜！",
    icon: "🌅",
    palette: ["#fb923c", "#fcd34d", "#93c5fd"],
};

const NOON_SCENE: LifeScene = LifeScene {
    id: "noon",
    title: "奋斗正当时",
    text: "生命如海浪，勇敢者乘风破浪，追逐梦想！",
    long_text: "用积极的心态，迎接无限的大惊喜！当年岁渐长，你会发现曾经以为的困难，不过是生命中的一个跳板。",
    icon: "⛅",
    palette: ["#38bdf8", "#93c5fd", "#a5b4fc"],
};

// Presented as "dusk" although the bucket is called evening.
const DUSK_SCENE: LifeScene = LifeScene {
    id: "dusk",
    title: "余晖映照",
    text: "当日落余晖时，生活渐行渐远，回首往昔，你会发现生命中的每一步都如此珍贵。",
    long_text: "回想起所有的哀伤、痛楚、难以想象、未曾完成的事时，都是生命里的一个过客，你仍如当初般勇敢。",
    icon: "🌅",
    palette: ["#a855f7", "#f472b6", "#fdba74"],
};

pub fn quotes_for(bucket: SceneBucket) -> &'static [&'static str; QUOTES_PER_BUCKET] {
    match bucket {
        SceneBucket::Morning => &MORNING_QUOTES,
        SceneBucket::Noon => &NOON_QUOTES,
        SceneBucket::Evening => &EVENING_QUOTES,
    }
}

pub fn scene_for(bucket: SceneBucket) -> &'static LifeScene {
    match bucket {
        SceneBucket::Morning => &MORNING_SCENE,
        SceneBucket::Noon => &NOON_SCENE,
        SceneBucket::Evening => &DUSK_SCENE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evening_bucket_uses_dusk_scene() {
        assert_eq!(scene_for(SceneBucket::Evening).id, "dusk");
        assert_eq!(scene_for(SceneBucket::Morning).id, "morning");
        assert_eq!(scene_for(SceneBucket::Noon).id, "noon");
    }

    #[test]
    fn quote_lists_are_distinct_per_bucket() {
        let morning = quotes_for(SceneBucket::Morning);
        let evening = quotes_for(SceneBucket::Evening);
        assert!(morning.iter().all(|quote| !evening.contains(quote)));
        assert!(quotes_for(SceneBucket::Noon).iter().all(|quote| !quote.is_empty()));
    }
}
