//! MacJapanese double-byte mapping, sorted by code
//!
//! Apple's KanjiTalk 7 table: JIS X 0208 in Shift-JIS layout, the Apple
//! extension rows 0x85-0x88, and vertical forms in rows 0xEB-0xED. Codes
//! standing for several units carry Apple's transcoding hints
//! (U+F860-U+F862 grouping prefixes, U+F87A, U+F87E, U+F87F variant tags).

pub(super) static DOUBLE_BYTE: &[(u16, &str)] = &[
    (0x8140, "\u{3000}"), (0x8141, "\u{3001}"), (0x8142, "\u{3002}"), (0x8143, "\u{FF0C}"),
    (0x8144, "\u{FF0E}"), (0x8145, "\u{30FB}"), (0x8146, "\u{FF1A}"), (0x8147, "\u{FF1B}"),
    (0x8148, "\u{FF1F}"), (0x8149, "\u{FF01}"), (0x814A, "\u{309B}"), (0x814B, "\u{309C}"),
    (0x814C, "\u{00B4}"), (0x814D, "\u{FF40}"), (0x814E, "\u{00A8}"), (0x814F, "\u{FF3E}"),
    (0x8150, "\u{FFE3}"), (0x8151, "\u{FF3F}"), (0x8152, "\u{30FD}"), (0x8153, "\u{30FE}"),
    (0x8154, "\u{309D}"), (0x8155, "\u{309E}"), (0x8156, "\u{3003}"), (0x8157, "\u{4EDD}"),
    (0x8158, "\u{3005}"), (0x8159, "\u{3006}"), (0x815A, "\u{3007}"), (0x815B, "\u{30FC}"),
    (0x815C, "\u{2014}"), (0x815D, "\u{2010}"), (0x815E, "\u{FF0F}"), (0x815F, "\u{FF3C}"),
    (0x8160, "\u{301C}"), (0x8161, "\u{2016}"), (0x8162, "\u{FF5C}"), (0x8163, "\u{2026}"),
    (0x8164, "\u{2025}"), (0x8165, "\u{2018}"), (0x8166, "\u{2019}"), (0x8167, "\u{201C}"),
    (0x8168, "\u{201D}"), (0x8169, "\u{FF08}"), (0x816A, "\u{FF09}"), (0x816B, "\u{3014}"),
    (0x816C, "\u{3015}"), (0x816D, "\u{FF3B}"), (0x816E, "\u{FF3D}"), (0x816F, "\u{FF5B}"),
    (0x8170, "\u{FF5D}"), (0x8171, "\u{3008}"), (0x8172, "\u{3009}"), (0x8173, "\u{300A}"),
    (0x8174, "\u{300B}"), (0x8175, "\u{300C}"), (0x8176, "\u{300D}"), (0x8177, "\u{300E}"),
    (0x8178, "\u{300F}"), (0x8179, "\u{3010}"), (0x817A, "\u{3011}"), (0x817B, "\u{FF0B}"),
    (0x817C, "\u{2212}"), (0x817D, "\u{00B1}"), (0x817E, "\u{00D7}"), (0x8180, "\u{00F7}"),
    (0x8181, "\u{FF1D}"), (0x8182, "\u{2260}"), (0x8183, "\u{FF1C}"), (0x8184, "\u{FF1E}"),
    (0x8185, "\u{2266}"), (0x8186, "\u{2267}"), (0x8187, "\u{221E}"), (0x8188, "\u{2234}"),
    (0x8189, "\u{2642}"), (0x818A, "\u{2640}"), (0x818B, "\u{00B0}"), (0x818C, "\u{2032}"),
    (0x818D, "\u{2033}"), (0x818E, "\u{2103}"), (0x818F, "\u{FFE5}"), (0x8190, "\u{FF04}"),
    (0x8191, "\u{00A2}"), (0x8192, "\u{00A3}"), (0x8193, "\u{FF05}"), (0x8194, "\u{FF03}"),
    (0x8195, "\u{FF06}"), (0x8196, "\u{FF0A}"), (0x8197, "\u{FF20}"), (0x8198, "\u{00A7}"),
    (0x8199, "\u{2606}"), (0x819A, "\u{2605}"), (0x819B, "\u{25CB}"), (0x819C, "\u{25CF}"),
    (0x819D, "\u{25CE}"), (0x819E, "\u{25C7}"), (0x819F, "\u{25C6}"), (0x81A0, "\u{25A1}"),
    (0x81A1, "\u{25A0}"), (0x81A2, "\u{25B3}"), (0x81A3, "\u{25B2}"), (0x81A4, "\u{25BD}"),
    (0x81A5, "\u{25BC}"), (0x81A6, "\u{203B}"), (0x81A7, "\u{3012}"), (0x81A8, "\u{2192}"),
    (0x81A9, "\u{2190}"), (0x81AA, "\u{2191}"), (0x81AB, "\u{2193}"), (0x81AC, "\u{3013}"),
    (0x81B8, "\u{2208}"), (0x81B9, "\u{220B}"), (0x81BA, "\u{2286}"), (0x81BB, "\u{2287}"),
    (0x81BC, "\u{2282}"), (0x81BD, "\u{2283}"), (0x81BE, "\u{222A}"), (0x81BF, "\u{2229}"),
    (0x81C8, "\u{2227}"), (0x81C9, "\u{2228}"), (0x81CA, "\u{00AC}"), (0x81CB, "\u{21D2}"),
    (0x81CC, "\u{21D4}"), (0x81CD, "\u{2200}"), (0x81CE, "\u{2203}"), (0x81DA, "\u{2220}"),
    (0x81DB, "\u{22A5}"), (0x81DC, "\u{2312}"), (0x81DD, "\u{2202}"), (0x81DE, "\u{2207}"),
    (0x81DF, "\u{2261}"), (0x81E0, "\u{2252}"), (0x81E1, "\u{226A}"), (0x81E2, "\u{226B}"),
    (0x81E3, "\u{221A}"), (0x81E4, "\u{223D}"), (0x81E5, "\u{221D}"), (0x81E6, "\u{2235}"),
    (0x81E7, "\u{222B}"), (0x81E8, "\u{222C}"), (0x81F0, "\u{212B}"), (0x81F1, "\u{2030}"),
    (0x81F2, "\u{266F}"), (0x81F3, "\u{266D}"), (0x81F4, "\u{266A}"), (0x81F5, "\u{2020}"),
    (0x81F6, "\u{2021}"), (0x81F7, "\u{00B6}"), (0x81FC, "\u{25EF}"), (0x824F, "\u{FF10}"),
    (0x8250, "\u{FF11}"), (0x8251, "\u{FF12}"), (0x8252, "\u{FF13}"), (0x8253, "\u{FF14}"),
    (0x8254, "\u{FF15}"), (0x8255, "\u{FF16}"), (0x8256, "\u{FF17}"), (0x8257, "\u{FF18}"),
    (0x8258, "\u{FF19}"), (0x8260, "\u{FF21}"), (0x8261, "\u{FF22}"), (0x8262, "\u{FF23}"),
    (0x8263, "\u{FF24}"), (0x8264, "\u{FF25}"), (0x8265, "\u{FF26}"), (0x8266, "\u{FF27}"),
    (0x8267, "\u{FF28}"), (0x8268, "\u{FF29}"), (0x8269, "\u{FF2A}"), (0x826A, "\u{FF2B}"),
    (0x826B, "\u{FF2C}"), (0x826C, "\u{FF2D}"), (0x826D, "\u{FF2E}"), (0x826E, "\u{FF2F}"),
    (0x826F, "\u{FF30}"), (0x8270, "\u{FF31}"), (0x8271, "\u{FF32}"), (0x8272, "\u{FF33}"),
    (0x8273, "\u{FF34}"), (0x8274, "\u{FF35}"), (0x8275, "\u{FF36}"), (0x8276, "\u{FF37}"),
    (0x8277, "\u{FF38}"), (0x8278, "\u{FF39}"), (0x8279, "\u{FF3A}"), (0x8281, "\u{FF41}"),
    (0x8282, "\u{FF42}"), (0x8283, "\u{FF43}"), (0x8284, "\u{FF44}"), (0x8285, "\u{FF45}"),
    (0x8286, "\u{FF46}"), (0x8287, "\u{FF47}"), (0x8288, "\u{FF48}"), (0x8289, "\u{FF49}"),
    (0x828A, "\u{FF4A}"), (0x828B, "\u{FF4B}"), (0x828C, "\u{FF4C}"), (0x828D, "\u{FF4D}"),
    (0x828E, "\u{FF4E}"), (0x828F, "\u{FF4F}"), (0x8290, "\u{FF50}"), (0x8291, "\u{FF51}"),
    (0x8292, "\u{FF52}"), (0x8293, "\u{FF53}"), (0x8294, "\u{FF54}"), (0x8295, "\u{FF55}"),
    (0x8296, "\u{FF56}"), (0x8297, "\u{FF57}"), (0x8298, "\u{FF58}"), (0x8299, "\u{FF59}"),
    (0x829A, "\u{FF5A}"), (0x829F, "\u{3041}"), (0x82A0, "\u{3042}"), (0x82A1, "\u{3043}"),
    (0x82A2, "\u{3044}"), (0x82A3, "\u{3045}"), (0x82A4, "\u{3046}"), (0x82A5, "\u{3047}"),
    (0x82A6, "\u{3048}"), (0x82A7, "\u{3049}"), (0x82A8, "\u{304A}"), (0x82A9, "\u{304B}"),
    (0x82AA, "\u{304C}"), (0x82AB, "\u{304D}"), (0x82AC, "\u{304E}"), (0x82AD, "\u{304F}"),
    (0x82AE, "\u{3050}"), (0x82AF, "\u{3051}"), (0x82B0, "\u{3052}"), (0x82B1, "\u{3053}"),
    (0x82B2, "\u{3054}"), (0x82B3, "\u{3055}"), (0x82B4, "\u{3056}"), (0x82B5, "\u{3057}"),
    (0x82B6, "\u{3058}"), (0x82B7, "\u{3059}"), (0x82B8, "\u{305A}"), (0x82B9, "\u{305B}"),
    (0x82BA, "\u{305C}"), (0x82BB, "\u{305D}"), (0x82BC, "\u{305E}"), (0x82BD, "\u{305F}"),
    (0x82BE, "\u{3060}"), (0x82BF, "\u{3061}"), (0x82C0, "\u{3062}"), (0x82C1, "\u{3063}"),
    (0x82C2, "\u{3064}"), (0x82C3, "\u{3065}"), (0x82C4, "\u{3066}"), (0x82C5, "\u{3067}"),
    (0x82C6, "\u{3068}"), (0x82C7, "\u{3069}"), (0x82C8, "\u{306A}"), (0x82C9, "\u{306B}"),
    (0x82CA, "\u{306C}"), (0x82CB, "\u{306D}"), (0x82CC, "\u{306E}"), (0x82CD, "\u{306F}"),
    (0x82CE, "\u{3070}"), (0x82CF, "\u{3071}"), (0x82D0, "\u{3072}"), (0x82D1, "\u{3073}"),
    (0x82D2, "\u{3074}"), (0x82D3, "\u{3075}"), (0x82D4, "\u{3076}"), (0x82D5, "\u{3077}"),
    (0x82D6, "\u{3078}"), (0x82D7, "\u{3079}"), (0x82D8, "\u{307A}"), (0x82D9, "\u{307B}"),
    (0x82DA, "\u{307C}"), (0x82DB, "\u{307D}"), (0x82DC, "\u{307E}"), (0x82DD, "\u{307F}"),
    (0x82DE, "\u{3080}"), (0x82DF, "\u{3081}"), (0x82E0, "\u{3082}"), (0x82E1, "\u{3083}"),
    (0x82E2, "\u{3084}"), (0x82E3, "\u{3085}"), (0x82E4, "\u{3086}"), (0x82E5, "\u{3087}"),
    (0x82E6, "\u{3088}"), (0x82E7, "\u{3089}"), (0x82E8, "\u{308A}"), (0x82E9, "\u{308B}"),
    (0x82EA, "\u{308C}"), (0x82EB, "\u{308D}"), (0x82EC, "\u{308E}"), (0x82ED, "\u{308F}"),
    (0x82EE, "\u{3090}"), (0x82EF, "\u{3091}"), (0x82F0, "\u{3092}"), (0x82F1, "\u{3093}"),
    (0x8340, "\u{30A1}"), (0x8341, "\u{30A2}"), (0x8342, "\u{30A3}"), (0x8343, "\u{30A4}"),
    (0x8344, "\u{30A5}"), (0x8345, "\u{30A6}"), (0x8346, "\u{30A7}"), (0x8347, "\u{30A8}"),
    (0x8348, "\u{30A9}"), (0x8349, "\u{30AA}"), (0x834A, "\u{30AB}"), (0x834B, "\u{30AC}"),
    (0x834C, "\u{30AD}"), (0x834D, "\u{30AE}"), (0x834E, "\u{30AF}"), (0x834F, "\u{30B0}"),
    (0x8350, "\u{30B1}"), (0x8351, "\u{30B2}"), (0x8352, "\u{30B3}"), (0x8353, "\u{30B4}"),
    (0x8354, "\u{30B5}"), (0x8355, "\u{30B6}"), (0x8356, "\u{30B7}"), (0x8357, "\u{30B8}"),
    (0x8358, "\u{30B9}"), (0x8359, "\u{30BA}"), (0x835A, "\u{30BB}"), (0x835B, "\u{30BC}"),
    (0x835C, "\u{30BD}"), (0x835D, "\u{30BE}"), (0x835E, "\u{30BF}"), (0x835F, "\u{30C0}"),
    (0x8360, "\u{30C1}"), (0x8361, "\u{30C2}"), (0x8362, "\u{30C3}"), (0x8363, "\u{30C4}"),
    (0x8364, "\u{30C5}"), (0x8365, "\u{30C6}"), (0x8366, "\u{30C7}"), (0x8367, "\u{30C8}"),
    (0x8368, "\u{30C9}"), (0x8369, "\u{30CA}"), (0x836A, "\u{30CB}"), (0x836B, "\u{30CC}"),
    (0x836C, "\u{30CD}"), (0x836D, "\u{30CE}"), (0x836E, "\u{30CF}"), (0x836F, "\u{30D0}"),
    (0x8370, "\u{30D1}"), (0x8371, "\u{30D2}"), (0x8372, "\u{30D3}"), (0x8373, "\u{30D4}"),
    (0x8374, "\u{30D5}"), (0x8375, "\u{30D6}"), (0x8376, "\u{30D7}"), (0x8377, "\u{30D8}"),
    (0x8378, "\u{30D9}"), (0x8379, "\u{30DA}"), (0x837A, "\u{30DB}"), (0x837B, "\u{30DC}"),
    (0x837C, "\u{30DD}"), (0x837D, "\u{30DE}"), (0x837E, "\u{30DF}"), (0x8380, "\u{30E0}"),
    (0x8381, "\u{30E1}"), (0x8382, "\u{30E2}"), (0x8383, "\u{30E3}"), (0x8384, "\u{30E4}"),
    (0x8385, "\u{30E5}"), (0x8386, "\u{30E6}"), (0x8387, "\u{30E7}"), (0x8388, "\u{30E8}"),
    (0x8389, "\u{30E9}"), (0x838A, "\u{30EA}"), (0x838B, "\u{30EB}"), (0x838C, "\u{30EC}"),
    (0x838D, "\u{30ED}"), (0x838E, "\u{30EE}"), (0x838F, "\u{30EF}"), (0x8390, "\u{30F0}"),
    (0x8391, "\u{30F1}"), (0x8392, "\u{30F2}"), (0x8393, "\u{30F3}"), (0x8394, "\u{30F4}"),
    (0x8395, "\u{30F5}"), (0x8396, "\u{30F6}"), (0x839F, "\u{0391}"), (0x83A0, "\u{0392}"),
    (0x83A1, "\u{0393}"), (0x83A2, "\u{0394}"), (0x83A3, "\u{0395}"), (0x83A4, "\u{0396}"),
    (0x83A5, "\u{0397}"), (0x83A6, "\u{0398}"), (0x83A7, "\u{0399}"), (0x83A8, "\u{039A}"),
    (0x83A9, "\u{039B}"), (0x83AA, "\u{039C}"), (0x83AB, "\u{039D}"), (0x83AC, "\u{039E}"),
    (0x83AD, "\u{039F}"), (0x83AE, "\u{03A0}"), (0x83AF, "\u{03A1}"), (0x83B0, "\u{03A3}"),
    (0x83B1, "\u{03A4}"), (0x83B2, "\u{03A5}"), (0x83B3, "\u{03A6}"), (0x83B4, "\u{03A7}"),
    (0x83B5, "\u{03A8}"), (0x83B6, "\u{03A9}"), (0x83BF, "\u{03B1}"), (0x83C0, "\u{03B2}"),
    (0x83C1, "\u{03B3}"), (0x83C2, "\u{03B4}"), (0x83C3, "\u{03B5}"), (0x83C4, "\u{03B6}"),
    (0x83C5, "\u{03B7}"), (0x83C6, "\u{03B8}"), (0x83C7, "\u{03B9}"), (0x83C8, "\u{03BA}"),
    (0x83C9, "\u{03BB}"), (0x83CA, "\u{03BC}"), (0x83CB, "\u{03BD}"), (0x83CC, "\u{03BE}"),
    (0x83CD, "\u{03BF}"), (0x83CE, "\u{03C0}"), (0x83CF, "\u{03C1}"), (0x83D0, "\u{03C3}"),
    (0x83D1, "\u{03C4}"), (0x83D2, "\u{03C5}"), (0x83D3, "\u{03C6}"), (0x83D4, "\u{03C7}"),
    (0x83D5, "\u{03C8}"), (0x83D6, "\u{03C9}"), (0x8440, "\u{0410}"), (0x8441, "\u{0411}"),
    (0x8442, "\u{0412}"), (0x8443, "\u{0413}"), (0x8444, "\u{0414}"), (0x8445, "\u{0415}"),
    (0x8446, "\u{0401}"), (0x8447, "\u{0416}"), (0x8448, "\u{0417}"), (0x8449, "\u{0418}"),
    (0x844A, "\u{0419}"), (0x844B, "\u{041A}"), (0x844C, "\u{041B}"), (0x844D, "\u{041C}"),
    (0x844E, "\u{041D}"), (0x844F, "\u{041E}"), (0x8450, "\u{041F}"), (0x8451, "\u{0420}"),
    (0x8452, "\u{0421}"), (0x8453, "\u{0422}"), (0x8454, "\u{0423}"), (0x8455, "\u{0424}"),
    (0x8456, "\u{0425}"), (0x8457, "\u{0426}"), (0x8458, "\u{0427}"), (0x8459, "\u{0428}"),
    (0x845A, "\u{0429}"), (0x845B, "\u{042A}"), (0x845C, "\u{042B}"), (0x845D, "\u{042C}"),
    (0x845E, "\u{042D}"), (0x845F, "\u{042E}"), (0x8460, "\u{042F}"), (0x8470, "\u{0430}"),
    (0x8471, "\u{0431}"), (0x8472, "\u{0432}"), (0x8473, "\u{0433}"), (0x8474, "\u{0434}"),
    (0x8475, "\u{0435}"), (0x8476, "\u{0451}"), (0x8477, "\u{0436}"), (0x8478, "\u{0437}"),
    (0x8479, "\u{0438}"), (0x847A, "\u{0439}"), (0x847B, "\u{043A}"), (0x847C, "\u{043B}"),
    (0x847D, "\u{043C}"), (0x847E, "\u{043D}"), (0x8480, "\u{043E}"), (0x8481, "\u{043F}"),
    (0x8482, "\u{0440}"), (0x8483, "\u{0441}"), (0x8484, "\u{0442}"), (0x8485, "\u{0443}"),
    (0x8486, "\u{0444}"), (0x8487, "\u{0445}"), (0x8488, "\u{0446}"), (0x8489, "\u{0447}"),
    (0x848A, "\u{0448}"), (0x848B, "\u{0449}"), (0x848C, "\u{044A}"), (0x848D, "\u{044B}"),
    (0x848E, "\u{044C}"), (0x848F, "\u{044D}"), (0x8490, "\u{044E}"), (0x8491, "\u{044F}"),
    (0x849F, "\u{2500}"), (0x84A0, "\u{2502}"), (0x84A1, "\u{250C}"), (0x84A2, "\u{2510}"),
    (0x84A3, "\u{2518}"), (0x84A4, "\u{2514}"), (0x84A5, "\u{251C}"), (0x84A6, "\u{252C}"),
    (0x84A7, "\u{2524}"), (0x84A8, "\u{2534}"), (0x84A9, "\u{253C}"), (0x84AA, "\u{2501}"),
    (0x84AB, "\u{2503}"), (0x84AC, "\u{250F}"), (0x84AD, "\u{2513}"), (0x84AE, "\u{251B}"),
    (0x84AF, "\u{2517}"), (0x84B0, "\u{2523}"), (0x84B1, "\u{2533}"), (0x84B2, "\u{252B}"),
    (0x84B3, "\u{253B}"), (0x84B4, "\u{254B}"), (0x84B5, "\u{2520}"), (0x84B6, "\u{252F}"),
    (0x84B7, "\u{2528}"), (0x84B8, "\u{2537}"), (0x84B9, "\u{253F}"), (0x84BA, "\u{251D}"),
    (0x84BB, "\u{2530}"), (0x84BC, "\u{2525}"), (0x84BD, "\u{2538}"), (0x84BE, "\u{2542}"),
    (0x8540, "\u{2460}"), (0x8541, "\u{2461}"), (0x8542, "\u{2462}"), (0x8543, "\u{2463}"),
    (0x8544, "\u{2464}"), (0x8545, "\u{2465}"), (0x8546, "\u{2466}"), (0x8547, "\u{2467}"),
    (0x8548, "\u{2468}"), (0x8549, "\u{2469}"), (0x854A, "\u{246A}"), (0x854B, "\u{246B}"),
    (0x854C, "\u{246C}"), (0x854D, "\u{246D}"), (0x854E, "\u{246E}"), (0x854F, "\u{246F}"),
    (0x8550, "\u{2470}"), (0x8551, "\u{2471}"), (0x8552, "\u{2472}"), (0x8553, "\u{2473}"),
    (0x855E, "\u{2474}"), (0x855F, "\u{2475}"), (0x8560, "\u{2476}"), (0x8561, "\u{2477}"),
    (0x8562, "\u{2478}"), (0x8563, "\u{2479}"), (0x8564, "\u{247A}"), (0x8565, "\u{247B}"),
    (0x8566, "\u{247C}"), (0x8567, "\u{247D}"), (0x8568, "\u{247E}"), (0x8569, "\u{247F}"),
    (0x856A, "\u{2480}"), (0x856B, "\u{2481}"), (0x856C, "\u{2482}"), (0x856D, "\u{2483}"),
    (0x856E, "\u{2484}"), (0x856F, "\u{2485}"), (0x8570, "\u{2486}"), (0x8571, "\u{2487}"),
    (0x857C, "\u{2776}"), (0x857D, "\u{2777}"), (0x857E, "\u{2778}"), (0x8580, "\u{2779}"),
    (0x8581, "\u{277A}"), (0x8582, "\u{277B}"), (0x8583, "\u{277C}"), (0x8584, "\u{277D}"),
    (0x8585, "\u{277E}"), (0x8591, "\u{F860}\u{0030}\u{002E}"), (0x8592, "\u{2488}"),
    (0x8593, "\u{2489}"), (0x8594, "\u{248A}"), (0x8595, "\u{248B}"), (0x8596, "\u{248C}"),
    (0x8597, "\u{248D}"), (0x8598, "\u{248E}"), (0x8599, "\u{248F}"), (0x859A, "\u{2490}"),
    (0x859F, "\u{2160}"), (0x85A0, "\u{2161}"), (0x85A1, "\u{2162}"), (0x85A2, "\u{2163}"),
    (0x85A3, "\u{2164}"), (0x85A4, "\u{2165}"), (0x85A5, "\u{2166}"), (0x85A6, "\u{2167}"),
    (0x85A7, "\u{2168}"), (0x85A8, "\u{2169}"), (0x85A9, "\u{216A}"), (0x85AA, "\u{216B}"),
    (0x85AB, "\u{F862}\u{0058}\u{0049}\u{0049}\u{0049}"),
    (0x85AC, "\u{F861}\u{0058}\u{0049}\u{0056}"), (0x85AD, "\u{F860}\u{0058}\u{0056}"),
    (0x85B3, "\u{2170}"), (0x85B4, "\u{2171}"), (0x85B5, "\u{2172}"), (0x85B6, "\u{2173}"),
    (0x85B7, "\u{2174}"), (0x85B8, "\u{2175}"), (0x85B9, "\u{2176}"), (0x85BA, "\u{2177}"),
    (0x85BB, "\u{2178}"), (0x85BC, "\u{2179}"), (0x85BD, "\u{217A}"), (0x85BE, "\u{217B}"),
    (0x85BF, "\u{F862}\u{0078}\u{0069}\u{0069}\u{0069}"),
    (0x85C0, "\u{F861}\u{0078}\u{0069}\u{0076}"), (0x85C1, "\u{F860}\u{0078}\u{0076}"),
    (0x85DB, "\u{249C}"), (0x85DC, "\u{249D}"), (0x85DD, "\u{249E}"), (0x85DE, "\u{249F}"),
    (0x85DF, "\u{24A0}"), (0x85E0, "\u{24A1}"), (0x85E1, "\u{24A2}"), (0x85E2, "\u{24A3}"),
    (0x85E3, "\u{24A4}"), (0x85E4, "\u{24A5}"), (0x85E5, "\u{24A6}"), (0x85E6, "\u{24A7}"),
    (0x85E7, "\u{24A8}"), (0x85E8, "\u{24A9}"), (0x85E9, "\u{24AA}"), (0x85EA, "\u{24AB}"),
    (0x85EB, "\u{24AC}"), (0x85EC, "\u{24AD}"), (0x85ED, "\u{24AE}"), (0x85EE, "\u{24AF}"),
    (0x85EF, "\u{24B0}"), (0x85F0, "\u{24B1}"), (0x85F1, "\u{24B2}"), (0x85F2, "\u{24B3}"),
    (0x85F3, "\u{24B4}"), (0x85F4, "\u{24B5}"), (0x8640, "\u{339C}"), (0x8641, "\u{339F}"),
    (0x8642, "\u{339D}"), (0x8643, "\u{33A0}"), (0x8644, "\u{33A4}"), (0x8645, "\u{FF4D}\u{F87F}"),
    (0x8646, "\u{33A1}"), (0x8647, "\u{33A5}"), (0x8648, "\u{339E}"), (0x8649, "\u{33A2}"),
    (0x864A, "\u{338E}"), (0x864B, "\u{FF47}\u{F87F}"), (0x864C, "\u{338F}"), (0x864D, "\u{33C4}"),
    (0x864E, "\u{3396}"), (0x864F, "\u{3397}"), (0x8650, "\u{2113}"), (0x8651, "\u{3398}"),
    (0x8652, "\u{33B3}"), (0x8653, "\u{33B2}"), (0x8654, "\u{33B1}"), (0x8655, "\u{33B0}"),
    (0x8656, "\u{2109}"), (0x8657, "\u{33D4}"), (0x8658, "\u{33CB}"), (0x8659, "\u{3390}"),
    (0x865A, "\u{3385}"), (0x865B, "\u{3386}"), (0x865C, "\u{3387}"),
    (0x865D, "\u{F860}\u{0054}\u{0042}"), (0x869B, "\u{2116}"), (0x869C, "\u{33CD}"),
    (0x869D, "\u{2121}"), (0x869E, "\u{F861}\u{0046}\u{0041}\u{0058}"), (0x869F, "\u{2664}"),
    (0x86A0, "\u{2667}"), (0x86A1, "\u{2661}"), (0x86A2, "\u{2662}"), (0x86A3, "\u{2660}"),
    (0x86A4, "\u{2663}"), (0x86A5, "\u{2665}"), (0x86A6, "\u{2666}"), (0x86B3, "\u{3020}"),
    (0x86B4, "\u{260E}"), (0x86B5, "\u{3004}"), (0x86C7, "\u{261E}"), (0x86C8, "\u{261C}"),
    (0x86C9, "\u{261D}"), (0x86CA, "\u{261F}"), (0x86CB, "\u{21C6}"), (0x86CC, "\u{21C4}"),
    (0x86CD, "\u{21C5}"), (0x86CE, "\u{F860}\u{2193}\u{2191}"), (0x86CF, "\u{21E8}"),
    (0x86D0, "\u{21E6}"), (0x86D1, "\u{21E7}"), (0x86D2, "\u{21E9}"), (0x86D3, "\u{21E8}\u{F87A}"),
    (0x86D4, "\u{21E6}\u{F87A}"), (0x86D5, "\u{21E7}\u{F87A}"), (0x86D6, "\u{21E9}\u{F87A}"),
    (0x8740, "\u{3230}"), (0x8741, "\u{322A}"), (0x8742, "\u{322B}"), (0x8743, "\u{322C}"),
    (0x8744, "\u{322D}"), (0x8745, "\u{322E}"), (0x8746, "\u{322F}"), (0x8747, "\u{3240}"),
    (0x8748, "\u{3237}"), (0x8749, "\u{3242}"), (0x874A, "\u{3243}"), (0x874B, "\u{3239}"),
    (0x874C, "\u{323A}"), (0x874D, "\u{3231}"), (0x874E, "\u{323E}"), (0x874F, "\u{3234}"),
    (0x8750, "\u{3232}"), (0x8751, "\u{323B}"), (0x8752, "\u{3236}"), (0x8753, "\u{3233}"),
    (0x8754, "\u{3235}"), (0x8755, "\u{323C}"), (0x8756, "\u{323D}"), (0x8757, "\u{323F}"),
    (0x8758, "\u{3238}"), (0x8791, "\u{5927}\u{20DD}"), (0x8792, "\u{5C0F}\u{20DD}"),
    (0x8793, "\u{32A4}"), (0x8794, "\u{32A5}"), (0x8795, "\u{32A6}"), (0x8796, "\u{32A7}"),
    (0x8797, "\u{32A8}"), (0x8798, "\u{32A9}"), (0x8799, "\u{3296}"), (0x879A, "\u{329D}"),
    (0x879B, "\u{3298}"), (0x879C, "\u{329E}"), (0x879D, "\u{63A7}\u{20DD}"), (0x879E, "\u{3299}"),
    (0x879F, "\u{3349}"), (0x87A0, "\u{3322}"), (0x87A1, "\u{334D}"), (0x87A2, "\u{3314}"),
    (0x87A3, "\u{3316}"), (0x87A4, "\u{3305}"), (0x87A5, "\u{3333}"), (0x87A6, "\u{334E}"),
    (0x87A7, "\u{3303}"), (0x87A8, "\u{3336}"), (0x87A9, "\u{3318}"), (0x87AA, "\u{3315}"),
    (0x87AB, "\u{3327}"), (0x87AC, "\u{3351}"), (0x87AD, "\u{334A}"), (0x87AE, "\u{3339}"),
    (0x87AF, "\u{3357}"), (0x87B0, "\u{330D}"), (0x87B1, "\u{3342}"), (0x87B2, "\u{3323}"),
    (0x87B3, "\u{3326}"), (0x87B4, "\u{333B}"), (0x87B5, "\u{332B}"), (0x87BD, "\u{3300}"),
    (0x87BE, "\u{331E}"), (0x87BF, "\u{332A}"), (0x87C0, "\u{3331}"), (0x87C1, "\u{3347}"),
    (0x87E5, "\u{337E}"), (0x87E6, "\u{337D}"), (0x87E7, "\u{337C}"), (0x87E8, "\u{337B}"),
    (0x87FA, "\u{337F}"), (0x87FB, "\u{F862}\u{6709}\u{9650}\u{4F1A}\u{793E}"),
    (0x87FC, "\u{F862}\u{8CA1}\u{56E3}\u{6CD5}\u{4EBA}"), (0x8840, "\u{222E}"),
    (0x8841, "\u{221F}"), (0x8842, "\u{22BF}"), (0x8854, "\u{301D}"), (0x8855, "\u{301F}"),
    (0x8868, "\u{3094}"), (0x886A, "\u{30F7}"), (0x886B, "\u{30F8}"), (0x886C, "\u{30F9}"),
    (0x886D, "\u{30FA}"), (0x889F, "\u{4E9C}"), (0x88A0, "\u{5516}"), (0x88A1, "\u{5A03}"),
    (0x88A2, "\u{963F}"), (0x88A3, "\u{54C0}"), (0x88A4, "\u{611B}"), (0x88A5, "\u{6328}"),
    (0x88A6, "\u{59F6}"), (0x88A7, "\u{9022}"), (0x88A8, "\u{8475}"), (0x88A9, "\u{831C}"),
    (0x88AA, "\u{7A50}"), (0x88AB, "\u{60AA}"), (0x88AC, "\u{63E1}"), (0x88AD, "\u{6E25}"),
    (0x88AE, "\u{65ED}"), (0x88AF, "\u{8466}"), (0x88B0, "\u{82A6}"), (0x88B1, "\u{9BF5}"),
    (0x88B2, "\u{6893}"), (0x88B3, "\u{5727}"), (0x88B4, "\u{65A1}"), (0x88B5, "\u{6271}"),
    (0x88B6, "\u{5B9B}"), (0x88B7, "\u{59D0}"), (0x88B8, "\u{867B}"), (0x88B9, "\u{98F4}"),
    (0x88BA, "\u{7D62}"), (0x88BB, "\u{7DBE}"), (0x88BC, "\u{9B8E}"), (0x88BD, "\u{6216}"),
    (0x88BE, "\u{7C9F}"), (0x88BF, "\u{88B7}"), (0x88C0, "\u{5B89}"), (0x88C1, "\u{5EB5}"),
    (0x88C2, "\u{6309}"), (0x88C3, "\u{6697}"), (0x88C4, "\u{6848}"), (0x88C5, "\u{95C7}"),
    (0x88C6, "\u{978D}"), (0x88C7, "\u{674F}"), (0x88C8, "\u{4EE5}"), (0x88C9, "\u{4F0A}"),
    (0x88CA, "\u{4F4D}"), (0x88CB, "\u{4F9D}"), (0x88CC, "\u{5049}"), (0x88CD, "\u{56F2}"),
    (0x88CE, "\u{5937}"), (0x88CF, "\u{59D4}"), (0x88D0, "\u{5A01}"), (0x88D1, "\u{5C09}"),
    (0x88D2, "\u{60DF}"), (0x88D3, "\u{610F}"), (0x88D4, "\u{6170}"), (0x88D5, "\u{6613}"),
    (0x88D6, "\u{6905}"), (0x88D7, "\u{70BA}"), (0x88D8, "\u{754F}"), (0x88D9, "\u{7570}"),
    (0x88DA, "\u{79FB}"), (0x88DB, "\u{7DAD}"), (0x88DC, "\u{7DEF}"), (0x88DD, "\u{80C3}"),
    (0x88DE, "\u{840E}"), (0x88DF, "\u{8863}"), (0x88E0, "\u{8B02}"), (0x88E1, "\u{9055}"),
    (0x88E2, "\u{907A}"), (0x88E3, "\u{533B}"), (0x88E4, "\u{4E95}"), (0x88E5, "\u{4EA5}"),
    (0x88E6, "\u{57DF}"), (0x88E7, "\u{80B2}"), (0x88E8, "\u{90C1}"), (0x88E9, "\u{78EF}"),
    (0x88EA, "\u{4E00}"), (0x88EB, "\u{58F1}"), (0x88EC, "\u{6EA2}"), (0x88ED, "\u{9038}"),
    (0x88EE, "\u{7A32}"), (0x88EF, "\u{8328}"), (0x88F0, "\u{828B}"), (0x88F1, "\u{9C2F}"),
    (0x88F2, "\u{5141}"), (0x88F3, "\u{5370}"), (0x88F4, "\u{54BD}"), (0x88F5, "\u{54E1}"),
    (0x88F6, "\u{56E0}"), (0x88F7, "\u{59FB}"), (0x88F8, "\u{5F15}"), (0x88F9, "\u{98F2}"),
    (0x88FA, "\u{6DEB}"), (0x88FB, "\u{80E4}"), (0x88FC, "\u{852D}"), (0x8940, "\u{9662}"),
    (0x8941, "\u{9670}"), (0x8942, "\u{96A0}"), (0x8943, "\u{97FB}"), (0x8944, "\u{540B}"),
    (0x8945, "\u{53F3}"), (0x8946, "\u{5B87}"), (0x8947, "\u{70CF}"), (0x8948, "\u{7FBD}"),
    (0x8949, "\u{8FC2}"), (0x894A, "\u{96E8}"), (0x894B, "\u{536F}"), (0x894C, "\u{9D5C}"),
    (0x894D, "\u{7ABA}"), (0x894E, "\u{4E11}"), (0x894F, "\u{7893}"), (0x8950, "\u{81FC}"),
    (0x8951, "\u{6E26}"), (0x8952, "\u{5618}"), (0x8953, "\u{5504}"), (0x8954, "\u{6B1D}"),
    (0x8955, "\u{851A}"), (0x8956, "\u{9C3B}"), (0x8957, "\u{59E5}"), (0x8958, "\u{53A9}"),
    (0x8959, "\u{6D66}"), (0x895A, "\u{74DC}"), (0x895B, "\u{958F}"), (0x895C, "\u{5642}"),
    (0x895D, "\u{4E91}"), (0x895E, "\u{904B}"), (0x895F, "\u{96F2}"), (0x8960, "\u{834F}"),
    (0x8961, "\u{990C}"), (0x8962, "\u{53E1}"), (0x8963, "\u{55B6}"), (0x8964, "\u{5B30}"),
    (0x8965, "\u{5F71}"), (0x8966, "\u{6620}"), (0x8967, "\u{66F3}"), (0x8968, "\u{6804}"),
    (0x8969, "\u{6C38}"), (0x896A, "\u{6CF3}"), (0x896B, "\u{6D29}"), (0x896C, "\u{745B}"),
    (0x896D, "\u{76C8}"), (0x896E, "\u{7A4E}"), (0x896F, "\u{9834}"), (0x8970, "\u{82F1}"),
    (0x8971, "\u{885B}"), (0x8972, "\u{8A60}"), (0x8973, "\u{92ED}"), (0x8974, "\u{6DB2}"),
    (0x8975, "\u{75AB}"), (0x8976, "\u{76CA}"), (0x8977, "\u{99C5}"), (0x8978, "\u{60A6}"),
    (0x8979, "\u{8B01}"), (0x897A, "\u{8D8A}"), (0x897B, "\u{95B2}"), (0x897C, "\u{698E}"),
    (0x897D, "\u{53AD}"), (0x897E, "\u{5186}"), (0x8980, "\u{5712}"), (0x8981, "\u{5830}"),
    (0x8982, "\u{5944}"), (0x8983, "\u{5BB4}"), (0x8984, "\u{5EF6}"), (0x8985, "\u{6028}"),
    (0x8986, "\u{63A9}"), (0x8987, "\u{63F4}"), (0x8988, "\u{6CBF}"), (0x8989, "\u{6F14}"),
    (0x898A, "\u{708E}"), (0x898B, "\u{7114}"), (0x898C, "\u{7159}"), (0x898D, "\u{71D5}"),
    (0x898E, "\u{733F}"), (0x898F, "\u{7E01}"), (0x8990, "\u{8276}"), (0x8991, "\u{82D1}"),
    (0x8992, "\u{8597}"), (0x8993, "\u{9060}"), (0x8994, "\u{925B}"), (0x8995, "\u{9D1B}"),
    (0x8996, "\u{5869}"), (0x8997, "\u{65BC}"), (0x8998, "\u{6C5A}"), (0x8999, "\u{7525}"),
    (0x899A, "\u{51F9}"), (0x899B, "\u{592E}"), (0x899C, "\u{5965}"), (0x899D, "\u{5F80}"),
    (0x899E, "\u{5FDC}"), (0x899F, "\u{62BC}"), (0x89A0, "\u{65FA}"), (0x89A1, "\u{6A2A}"),
    (0x89A2, "\u{6B27}"), (0x89A3, "\u{6BB4}"), (0x89A4, "\u{738B}"), (0x89A5, "\u{7FC1}"),
    (0x89A6, "\u{8956}"), (0x89A7, "\u{9D2C}"), (0x89A8, "\u{9D0E}"), (0x89A9, "\u{9EC4}"),
    (0x89AA, "\u{5CA1}"), (0x89AB, "\u{6C96}"), (0x89AC, "\u{837B}"), (0x89AD, "\u{5104}"),
    (0x89AE, "\u{5C4B}"), (0x89AF, "\u{61B6}"), (0x89B0, "\u{81C6}"), (0x89B1, "\u{6876}"),
    (0x89B2, "\u{7261}"), (0x89B3, "\u{4E59}"), (0x89B4, "\u{4FFA}"), (0x89B5, "\u{5378}"),
    (0x89B6, "\u{6069}"), (0x89B7, "\u{6E29}"), (0x89B8, "\u{7A4F}"), (0x89B9, "\u{97F3}"),
    (0x89BA, "\u{4E0B}"), (0x89BB, "\u{5316}"), (0x89BC, "\u{4EEE}"), (0x89BD, "\u{4F55}"),
    (0x89BE, "\u{4F3D}"), (0x89BF, "\u{4FA1}"), (0x89C0, "\u{4F73}"), (0x89C1, "\u{52A0}"),
    (0x89C2, "\u{53EF}"), (0x89C3, "\u{5609}"), (0x89C4, "\u{590F}"), (0x89C5, "\u{5AC1}"),
    (0x89C6, "\u{5BB6}"), (0x89C7, "\u{5BE1}"), (0x89C8, "\u{79D1}"), (0x89C9, "\u{6687}"),
    (0x89CA, "\u{679C}"), (0x89CB, "\u{67B6}"), (0x89CC, "\u{6B4C}"), (0x89CD, "\u{6CB3}"),
    (0x89CE, "\u{706B}"), (0x89CF, "\u{73C2}"), (0x89D0, "\u{798D}"), (0x89D1, "\u{79BE}"),
    (0x89D2, "\u{7A3C}"), (0x89D3, "\u{7B87}"), (0x89D4, "\u{82B1}"), (0x89D5, "\u{82DB}"),
    (0x89D6, "\u{8304}"), (0x89D7, "\u{8377}"), (0x89D8, "\u{83EF}"), (0x89D9, "\u{83D3}"),
    (0x89DA, "\u{8766}"), (0x89DB, "\u{8AB2}"), (0x89DC, "\u{5629}"), (0x89DD, "\u{8CA8}"),
    (0x89DE, "\u{8FE6}"), (0x89DF, "\u{904E}"), (0x89E0, "\u{971E}"), (0x89E1, "\u{868A}"),
    (0x89E2, "\u{4FC4}"), (0x89E3, "\u{5CE8}"), (0x89E4, "\u{6211}"), (0x89E5, "\u{7259}"),
    (0x89E6, "\u{753B}"), (0x89E7, "\u{81E5}"), (0x89E8, "\u{82BD}"), (0x89E9, "\u{86FE}"),
    (0x89EA, "\u{8CC0}"), (0x89EB, "\u{96C5}"), (0x89EC, "\u{9913}"), (0x89ED, "\u{99D5}"),
    (0x89EE, "\u{4ECB}"), (0x89EF, "\u{4F1A}"), (0x89F0, "\u{89E3}"), (0x89F1, "\u{56DE}"),
    (0x89F2, "\u{584A}"), (0x89F3, "\u{58CA}"), (0x89F4, "\u{5EFB}"), (0x89F5, "\u{5FEB}"),
    (0x89F6, "\u{602A}"), (0x89F7, "\u{6094}"), (0x89F8, "\u{6062}"), (0x89F9, "\u{61D0}"),
    (0x89FA, "\u{6212}"), (0x89FB, "\u{62D0}"), (0x89FC, "\u{6539}"), (0x8A40, "\u{9B41}"),
    (0x8A41, "\u{6666}"), (0x8A42, "\u{68B0}"), (0x8A43, "\u{6D77}"), (0x8A44, "\u{7070}"),
    (0x8A45, "\u{754C}"), (0x8A46, "\u{7686}"), (0x8A47, "\u{7D75}"), (0x8A48, "\u{82A5}"),
    (0x8A49, "\u{87F9}"), (0x8A4A, "\u{958B}"), (0x8A4B, "\u{968E}"), (0x8A4C, "\u{8C9D}"),
    (0x8A4D, "\u{51F1}"), (0x8A4E, "\u{52BE}"), (0x8A4F, "\u{5916}"), (0x8A50, "\u{54B3}"),
    (0x8A51, "\u{5BB3}"), (0x8A52, "\u{5D16}"), (0x8A53, "\u{6168}"), (0x8A54, "\u{6982}"),
    (0x8A55, "\u{6DAF}"), (0x8A56, "\u{788D}"), (0x8A57, "\u{84CB}"), (0x8A58, "\u{8857}"),
    (0x8A59, "\u{8A72}"), (0x8A5A, "\u{93A7}"), (0x8A5B, "\u{9AB8}"), (0x8A5C, "\u{6D6C}"),
    (0x8A5D, "\u{99A8}"), (0x8A5E, "\u{86D9}"), (0x8A5F, "\u{57A3}"), (0x8A60, "\u{67FF}"),
    (0x8A61, "\u{86CE}"), (0x8A62, "\u{920E}"), (0x8A63, "\u{5283}"), (0x8A64, "\u{5687}"),
    (0x8A65, "\u{5404}"), (0x8A66, "\u{5ED3}"), (0x8A67, "\u{62E1}"), (0x8A68, "\u{64B9}"),
    (0x8A69, "\u{683C}"), (0x8A6A, "\u{6838}"), (0x8A6B, "\u{6BBB}"), (0x8A6C, "\u{7372}"),
    (0x8A6D, "\u{78BA}"), (0x8A6E, "\u{7A6B}"), (0x8A6F, "\u{899A}"), (0x8A70, "\u{89D2}"),
    (0x8A71, "\u{8D6B}"), (0x8A72, "\u{8F03}"), (0x8A73, "\u{90ED}"), (0x8A74, "\u{95A3}"),
    (0x8A75, "\u{9694}"), (0x8A76, "\u{9769}"), (0x8A77, "\u{5B66}"), (0x8A78, "\u{5CB3}"),
    (0x8A79, "\u{697D}"), (0x8A7A, "\u{984D}"), (0x8A7B, "\u{984E}"), (0x8A7C, "\u{639B}"),
    (0x8A7D, "\u{7B20}"), (0x8A7E, "\u{6A2B}"), (0x8A80, "\u{6A7F}"), (0x8A81, "\u{68B6}"),
    (0x8A82, "\u{9C0D}"), (0x8A83, "\u{6F5F}"), (0x8A84, "\u{5272}"), (0x8A85, "\u{559D}"),
    (0x8A86, "\u{6070}"), (0x8A87, "\u{62EC}"), (0x8A88, "\u{6D3B}"), (0x8A89, "\u{6E07}"),
    (0x8A8A, "\u{6ED1}"), (0x8A8B, "\u{845B}"), (0x8A8C, "\u{8910}"), (0x8A8D, "\u{8F44}"),
    (0x8A8E, "\u{4E14}"), (0x8A8F, "\u{9C39}"), (0x8A90, "\u{53F6}"), (0x8A91, "\u{691B}"),
    (0x8A92, "\u{6A3A}"), (0x8A93, "\u{9784}"), (0x8A94, "\u{682A}"), (0x8A95, "\u{515C}"),
    (0x8A96, "\u{7AC3}"), (0x8A97, "\u{84B2}"), (0x8A98, "\u{91DC}"), (0x8A99, "\u{938C}"),
    (0x8A9A, "\u{565B}"), (0x8A9B, "\u{9D28}"), (0x8A9C, "\u{6822}"), (0x8A9D, "\u{8305}"),
    (0x8A9E, "\u{8431}"), (0x8A9F, "\u{7CA5}"), (0x8AA0, "\u{5208}"), (0x8AA1, "\u{82C5}"),
    (0x8AA2, "\u{74E6}"), (0x8AA3, "\u{4E7E}"), (0x8AA4, "\u{4F83}"), (0x8AA5, "\u{51A0}"),
    (0x8AA6, "\u{5BD2}"), (0x8AA7, "\u{520A}"), (0x8AA8, "\u{52D8}"), (0x8AA9, "\u{52E7}"),
    (0x8AAA, "\u{5DFB}"), (0x8AAB, "\u{559A}"), (0x8AAC, "\u{582A}"), (0x8AAD, "\u{59E6}"),
    (0x8AAE, "\u{5B8C}"), (0x8AAF, "\u{5B98}"), (0x8AB0, "\u{5BDB}"), (0x8AB1, "\u{5E72}"),
    (0x8AB2, "\u{5E79}"), (0x8AB3, "\u{60A3}"), (0x8AB4, "\u{611F}"), (0x8AB5, "\u{6163}"),
    (0x8AB6, "\u{61BE}"), (0x8AB7, "\u{63DB}"), (0x8AB8, "\u{6562}"), (0x8AB9, "\u{67D1}"),
    (0x8ABA, "\u{6853}"), (0x8ABB, "\u{68FA}"), (0x8ABC, "\u{6B3E}"), (0x8ABD, "\u{6B53}"),
    (0x8ABE, "\u{6C57}"), (0x8ABF, "\u{6F22}"), (0x8AC0, "\u{6F97}"), (0x8AC1, "\u{6F45}"),
    (0x8AC2, "\u{74B0}"), (0x8AC3, "\u{7518}"), (0x8AC4, "\u{76E3}"), (0x8AC5, "\u{770B}"),
    (0x8AC6, "\u{7AFF}"), (0x8AC7, "\u{7BA1}"), (0x8AC8, "\u{7C21}"), (0x8AC9, "\u{7DE9}"),
    (0x8ACA, "\u{7F36}"), (0x8ACB, "\u{7FF0}"), (0x8ACC, "\u{809D}"), (0x8ACD, "\u{8266}"),
    (0x8ACE, "\u{839E}"), (0x8ACF, "\u{89B3}"), (0x8AD0, "\u{8ACC}"), (0x8AD1, "\u{8CAB}"),
    (0x8AD2, "\u{9084}"), (0x8AD3, "\u{9451}"), (0x8AD4, "\u{9593}"), (0x8AD5, "\u{9591}"),
    (0x8AD6, "\u{95A2}"), (0x8AD7, "\u{9665}"), (0x8AD8, "\u{97D3}"), (0x8AD9, "\u{9928}"),
    (0x8ADA, "\u{8218}"), (0x8ADB, "\u{4E38}"), (0x8ADC, "\u{542B}"), (0x8ADD, "\u{5CB8}"),
    (0x8ADE, "\u{5DCC}"), (0x8ADF, "\u{73A9}"), (0x8AE0, "\u{764C}"), (0x8AE1, "\u{773C}"),
    (0x8AE2, "\u{5CA9}"), (0x8AE3, "\u{7FEB}"), (0x8AE4, "\u{8D0B}"), (0x8AE5, "\u{96C1}"),
    (0x8AE6, "\u{9811}"), (0x8AE7, "\u{9854}"), (0x8AE8, "\u{9858}"), (0x8AE9, "\u{4F01}"),
    (0x8AEA, "\u{4F0E}"), (0x8AEB, "\u{5371}"), (0x8AEC, "\u{559C}"), (0x8AED, "\u{5668}"),
    (0x8AEE, "\u{57FA}"), (0x8AEF, "\u{5947}"), (0x8AF0, "\u{5B09}"), (0x8AF1, "\u{5BC4}"),
    (0x8AF2, "\u{5C90}"), (0x8AF3, "\u{5E0C}"), (0x8AF4, "\u{5E7E}"), (0x8AF5, "\u{5FCC}"),
    (0x8AF6, "\u{63EE}"), (0x8AF7, "\u{673A}"), (0x8AF8, "\u{65D7}"), (0x8AF9, "\u{65E2}"),
    (0x8AFA, "\u{671F}"), (0x8AFB, "\u{68CB}"), (0x8AFC, "\u{68C4}"), (0x8B40, "\u{6A5F}"),
    (0x8B41, "\u{5E30}"), (0x8B42, "\u{6BC5}"), (0x8B43, "\u{6C17}"), (0x8B44, "\u{6C7D}"),
    (0x8B45, "\u{757F}"), (0x8B46, "\u{7948}"), (0x8B47, "\u{5B63}"), (0x8B48, "\u{7A00}"),
    (0x8B49, "\u{7D00}"), (0x8B4A, "\u{5FBD}"), (0x8B4B, "\u{898F}"), (0x8B4C, "\u{8A18}"),
    (0x8B4D, "\u{8CB4}"), (0x8B4E, "\u{8D77}"), (0x8B4F, "\u{8ECC}"), (0x8B50, "\u{8F1D}"),
    (0x8B51, "\u{98E2}"), (0x8B52, "\u{9A0E}"), (0x8B53, "\u{9B3C}"), (0x8B54, "\u{4E80}"),
    (0x8B55, "\u{507D}"), (0x8B56, "\u{5100}"), (0x8B57, "\u{5993}"), (0x8B58, "\u{5B9C}"),
    (0x8B59, "\u{622F}"), (0x8B5A, "\u{6280}"), (0x8B5B, "\u{64EC}"), (0x8B5C, "\u{6B3A}"),
    (0x8B5D, "\u{72A0}"), (0x8B5E, "\u{7591}"), (0x8B5F, "\u{7947}"), (0x8B60, "\u{7FA9}"),
    (0x8B61, "\u{87FB}"), (0x8B62, "\u{8ABC}"), (0x8B63, "\u{8B70}"), (0x8B64, "\u{63AC}"),
    (0x8B65, "\u{83CA}"), (0x8B66, "\u{97A0}"), (0x8B67, "\u{5409}"), (0x8B68, "\u{5403}"),
    (0x8B69, "\u{55AB}"), (0x8B6A, "\u{6854}"), (0x8B6B, "\u{6A58}"), (0x8B6C, "\u{8A70}"),
    (0x8B6D, "\u{7827}"), (0x8B6E, "\u{6775}"), (0x8B6F, "\u{9ECD}"), (0x8B70, "\u{5374}"),
    (0x8B71, "\u{5BA2}"), (0x8B72, "\u{811A}"), (0x8B73, "\u{8650}"), (0x8B74, "\u{9006}"),
    (0x8B75, "\u{4E18}"), (0x8B76, "\u{4E45}"), (0x8B77, "\u{4EC7}"), (0x8B78, "\u{4F11}"),
    (0x8B79, "\u{53CA}"), (0x8B7A, "\u{5438}"), (0x8B7B, "\u{5BAE}"), (0x8B7C, "\u{5F13}"),
    (0x8B7D, "\u{6025}"), (0x8B7E, "\u{6551}"), (0x8B80, "\u{673D}"), (0x8B81, "\u{6C42}"),
    (0x8B82, "\u{6C72}"), (0x8B83, "\u{6CE3}"), (0x8B84, "\u{7078}"), (0x8B85, "\u{7403}"),
    (0x8B86, "\u{7A76}"), (0x8B87, "\u{7AAE}"), (0x8B88, "\u{7B08}"), (0x8B89, "\u{7D1A}"),
    (0x8B8A, "\u{7CFE}"), (0x8B8B, "\u{7D66}"), (0x8B8C, "\u{65E7}"), (0x8B8D, "\u{725B}"),
    (0x8B8E, "\u{53BB}"), (0x8B8F, "\u{5C45}"), (0x8B90, "\u{5DE8}"), (0x8B91, "\u{62D2}"),
    (0x8B92, "\u{62E0}"), (0x8B93, "\u{6319}"), (0x8B94, "\u{6E20}"), (0x8B95, "\u{865A}"),
    (0x8B96, "\u{8A31}"), (0x8B97, "\u{8DDD}"), (0x8B98, "\u{92F8}"), (0x8B99, "\u{6F01}"),
    (0x8B9A, "\u{79A6}"), (0x8B9B, "\u{9B5A}"), (0x8B9C, "\u{4EA8}"), (0x8B9D, "\u{4EAB}"),
    (0x8B9E, "\u{4EAC}"), (0x8B9F, "\u{4F9B}"), (0x8BA0, "\u{4FA0}"), (0x8BA1, "\u{50D1}"),
    (0x8BA2, "\u{5147}"), (0x8BA3, "\u{7AF6}"), (0x8BA4, "\u{5171}"), (0x8BA5, "\u{51F6}"),
    (0x8BA6, "\u{5354}"), (0x8BA7, "\u{5321}"), (0x8BA8, "\u{537F}"), (0x8BA9, "\u{53EB}"),
    (0x8BAA, "\u{55AC}"), (0x8BAB, "\u{5883}"), (0x8BAC, "\u{5CE1}"), (0x8BAD, "\u{5F37}"),
    (0x8BAE, "\u{5F4A}"), (0x8BAF, "\u{602F}"), (0x8BB0, "\u{6050}"), (0x8BB1, "\u{606D}"),
    (0x8BB2, "\u{631F}"), (0x8BB3, "\u{6559}"), (0x8BB4, "\u{6A4B}"), (0x8BB5, "\u{6CC1}"),
    (0x8BB6, "\u{72C2}"), (0x8BB7, "\u{72ED}"), (0x8BB8, "\u{77EF}"), (0x8BB9, "\u{80F8}"),
    (0x8BBA, "\u{8105}"), (0x8BBB, "\u{8208}"), (0x8BBC, "\u{854E}"), (0x8BBD, "\u{90F7}"),
    (0x8BBE, "\u{93E1}"), (0x8BBF, "\u{97FF}"), (0x8BC0, "\u{9957}"), (0x8BC1, "\u{9A5A}"),
    (0x8BC2, "\u{4EF0}"), (0x8BC3, "\u{51DD}"), (0x8BC4, "\u{5C2D}"), (0x8BC5, "\u{6681}"),
    (0x8BC6, "\u{696D}"), (0x8BC7, "\u{5C40}"), (0x8BC8, "\u{66F2}"), (0x8BC9, "\u{6975}"),
    (0x8BCA, "\u{7389}"), (0x8BCB, "\u{6850}"), (0x8BCC, "\u{7C81}"), (0x8BCD, "\u{50C5}"),
    (0x8BCE, "\u{52E4}"), (0x8BCF, "\u{5747}"), (0x8BD0, "\u{5DFE}"), (0x8BD1, "\u{9326}"),
    (0x8BD2, "\u{65A4}"), (0x8BD3, "\u{6B23}"), (0x8BD4, "\u{6B3D}"), (0x8BD5, "\u{7434}"),
    (0x8BD6, "\u{7981}"), (0x8BD7, "\u{79BD}"), (0x8BD8, "\u{7B4B}"), (0x8BD9, "\u{7DCA}"),
    (0x8BDA, "\u{82B9}"), (0x8BDB, "\u{83CC}"), (0x8BDC, "\u{887F}"), (0x8BDD, "\u{895F}"),
    (0x8BDE, "\u{8B39}"), (0x8BDF, "\u{8FD1}"), (0x8BE0, "\u{91D1}"), (0x8BE1, "\u{541F}"),
    (0x8BE2, "\u{9280}"), (0x8BE3, "\u{4E5D}"), (0x8BE4, "\u{5036}"), (0x8BE5, "\u{53E5}"),
    (0x8BE6, "\u{533A}"), (0x8BE7, "\u{72D7}"), (0x8BE8, "\u{7396}"), (0x8BE9, "\u{77E9}"),
    (0x8BEA, "\u{82E6}"), (0x8BEB, "\u{8EAF}"), (0x8BEC, "\u{99C6}"), (0x8BED, "\u{99C8}"),
    (0x8BEE, "\u{99D2}"), (0x8BEF, "\u{5177}"), (0x8BF0, "\u{611A}"), (0x8BF1, "\u{865E}"),
    (0x8BF2, "\u{55B0}"), (0x8BF3, "\u{7A7A}"), (0x8BF4, "\u{5076}"), (0x8BF5, "\u{5BD3}"),
    (0x8BF6, "\u{9047}"), (0x8BF7, "\u{9685}"), (0x8BF8, "\u{4E32}"), (0x8BF9, "\u{6ADB}"),
    (0x8BFA, "\u{91E7}"), (0x8BFB, "\u{5C51}"), (0x8BFC, "\u{5C48}"), (0x8C40, "\u{6398}"),
    (0x8C41, "\u{7A9F}"), (0x8C42, "\u{6C93}"), (0x8C43, "\u{9774}"), (0x8C44, "\u{8F61}"),
    (0x8C45, "\u{7AAA}"), (0x8C46, "\u{718A}"), (0x8C47, "\u{9688}"), (0x8C48, "\u{7C82}"),
    (0x8C49, "\u{6817}"), (0x8C4A, "\u{7E70}"), (0x8C4B, "\u{6851}"), (0x8C4C, "\u{936C}"),
    (0x8C4D, "\u{52F2}"), (0x8C4E, "\u{541B}"), (0x8C4F, "\u{85AB}"), (0x8C50, "\u{8A13}"),
    (0x8C51, "\u{7FA4}"), (0x8C52, "\u{8ECD}"), (0x8C53, "\u{90E1}"), (0x8C54, "\u{5366}"),
    (0x8C55, "\u{8888}"), (0x8C56, "\u{7941}"), (0x8C57, "\u{4FC2}"), (0x8C58, "\u{50BE}"),
    (0x8C59, "\u{5211}"), (0x8C5A, "\u{5144}"), (0x8C5B, "\u{5553}"), (0x8C5C, "\u{572D}"),
    (0x8C5D, "\u{73EA}"), (0x8C5E, "\u{578B}"), (0x8C5F, "\u{5951}"), (0x8C60, "\u{5F62}"),
    (0x8C61, "\u{5F84}"), (0x8C62, "\u{6075}"), (0x8C63, "\u{6176}"), (0x8C64, "\u{6167}"),
    (0x8C65, "\u{61A9}"), (0x8C66, "\u{63B2}"), (0x8C67, "\u{643A}"), (0x8C68, "\u{656C}"),
    (0x8C69, "\u{666F}"), (0x8C6A, "\u{6842}"), (0x8C6B, "\u{6E13}"), (0x8C6C, "\u{7566}"),
    (0x8C6D, "\u{7A3D}"), (0x8C6E, "\u{7CFB}"), (0x8C6F, "\u{7D4C}"), (0x8C70, "\u{7D99}"),
    (0x8C71, "\u{7E4B}"), (0x8C72, "\u{7F6B}"), (0x8C73, "\u{830E}"), (0x8C74, "\u{834A}"),
    (0x8C75, "\u{86CD}"), (0x8C76, "\u{8A08}"), (0x8C77, "\u{8A63}"), (0x8C78, "\u{8B66}"),
    (0x8C79, "\u{8EFD}"), (0x8C7A, "\u{981A}"), (0x8C7B, "\u{9D8F}"), (0x8C7C, "\u{82B8}"),
    (0x8C7D, "\u{8FCE}"), (0x8C7E, "\u{9BE8}"), (0x8C80, "\u{5287}"), (0x8C81, "\u{621F}"),
    (0x8C82, "\u{6483}"), (0x8C83, "\u{6FC0}"), (0x8C84, "\u{9699}"), (0x8C85, "\u{6841}"),
    (0x8C86, "\u{5091}"), (0x8C87, "\u{6B20}"), (0x8C88, "\u{6C7A}"), (0x8C89, "\u{6F54}"),
    (0x8C8A, "\u{7A74}"), (0x8C8B, "\u{7D50}"), (0x8C8C, "\u{8840}"), (0x8C8D, "\u{8A23}"),
    (0x8C8E, "\u{6708}"), (0x8C8F, "\u{4EF6}"), (0x8C90, "\u{5039}"), (0x8C91, "\u{5026}"),
    (0x8C92, "\u{5065}"), (0x8C93, "\u{517C}"), (0x8C94, "\u{5238}"), (0x8C95, "\u{5263}"),
    (0x8C96, "\u{55A7}"), (0x8C97, "\u{570F}"), (0x8C98, "\u{5805}"), (0x8C99, "\u{5ACC}"),
    (0x8C9A, "\u{5EFA}"), (0x8C9B, "\u{61B2}"), (0x8C9C, "\u{61F8}"), (0x8C9D, "\u{62F3}"),
    (0x8C9E, "\u{6372}"), (0x8C9F, "\u{691C}"), (0x8CA0, "\u{6A29}"), (0x8CA1, "\u{727D}"),
    (0x8CA2, "\u{72AC}"), (0x8CA3, "\u{732E}"), (0x8CA4, "\u{7814}"), (0x8CA5, "\u{786F}"),
    (0x8CA6, "\u{7D79}"), (0x8CA7, "\u{770C}"), (0x8CA8, "\u{80A9}"), (0x8CA9, "\u{898B}"),
    (0x8CAA, "\u{8B19}"), (0x8CAB, "\u{8CE2}"), (0x8CAC, "\u{8ED2}"), (0x8CAD, "\u{9063}"),
    (0x8CAE, "\u{9375}"), (0x8CAF, "\u{967A}"), (0x8CB0, "\u{9855}"), (0x8CB1, "\u{9A13}"),
    (0x8CB2, "\u{9E78}"), (0x8CB3, "\u{5143}"), (0x8CB4, "\u{539F}"), (0x8CB5, "\u{53B3}"),
    (0x8CB6, "\u{5E7B}"), (0x8CB7, "\u{5F26}"), (0x8CB8, "\u{6E1B}"), (0x8CB9, "\u{6E90}"),
    (0x8CBA, "\u{7384}"), (0x8CBB, "\u{73FE}"), (0x8CBC, "\u{7D43}"), (0x8CBD, "\u{8237}"),
    (0x8CBE, "\u{8A00}"), (0x8CBF, "\u{8AFA}"), (0x8CC0, "\u{9650}"), (0x8CC1, "\u{4E4E}"),
    (0x8CC2, "\u{500B}"), (0x8CC3, "\u{53E4}"), (0x8CC4, "\u{547C}"), (0x8CC5, "\u{56FA}"),
    (0x8CC6, "\u{59D1}"), (0x8CC7, "\u{5B64}"), (0x8CC8, "\u{5DF1}"), (0x8CC9, "\u{5EAB}"),
    (0x8CCA, "\u{5F27}"), (0x8CCB, "\u{6238}"), (0x8CCC, "\u{6545}"), (0x8CCD, "\u{67AF}"),
    (0x8CCE, "\u{6E56}"), (0x8CCF, "\u{72D0}"), (0x8CD0, "\u{7CCA}"), (0x8CD1, "\u{88B4}"),
    (0x8CD2, "\u{80A1}"), (0x8CD3, "\u{80E1}"), (0x8CD4, "\u{83F0}"), (0x8CD5, "\u{864E}"),
    (0x8CD6, "\u{8A87}"), (0x8CD7, "\u{8DE8}"), (0x8CD8, "\u{9237}"), (0x8CD9, "\u{96C7}"),
    (0x8CDA, "\u{9867}"), (0x8CDB, "\u{9F13}"), (0x8CDC, "\u{4E94}"), (0x8CDD, "\u{4E92}"),
    (0x8CDE, "\u{4F0D}"), (0x8CDF, "\u{5348}"), (0x8CE0, "\u{5449}"), (0x8CE1, "\u{543E}"),
    (0x8CE2, "\u{5A2F}"), (0x8CE3, "\u{5F8C}"), (0x8CE4, "\u{5FA1}"), (0x8CE5, "\u{609F}"),
    (0x8CE6, "\u{68A7}"), (0x8CE7, "\u{6A8E}"), (0x8CE8, "\u{745A}"), (0x8CE9, "\u{7881}"),
    (0x8CEA, "\u{8A9E}"), (0x8CEB, "\u{8AA4}"), (0x8CEC, "\u{8B77}"), (0x8CED, "\u{9190}"),
    (0x8CEE, "\u{4E5E}"), (0x8CEF, "\u{9BC9}"), (0x8CF0, "\u{4EA4}"), (0x8CF1, "\u{4F7C}"),
    (0x8CF2, "\u{4FAF}"), (0x8CF3, "\u{5019}"), (0x8CF4, "\u{5016}"), (0x8CF5, "\u{5149}"),
    (0x8CF6, "\u{516C}"), (0x8CF7, "\u{529F}"), (0x8CF8, "\u{52B9}"), (0x8CF9, "\u{52FE}"),
    (0x8CFA, "\u{539A}"), (0x8CFB, "\u{53E3}"), (0x8CFC, "\u{5411}"), (0x8D40, "\u{540E}"),
    (0x8D41, "\u{5589}"), (0x8D42, "\u{5751}"), (0x8D43, "\u{57A2}"), (0x8D44, "\u{597D}"),
    (0x8D45, "\u{5B54}"), (0x8D46, "\u{5B5D}"), (0x8D47, "\u{5B8F}"), (0x8D48, "\u{5DE5}"),
    (0x8D49, "\u{5DE7}"), (0x8D4A, "\u{5DF7}"), (0x8D4B, "\u{5E78}"), (0x8D4C, "\u{5E83}"),
    (0x8D4D, "\u{5E9A}"), (0x8D4E, "\u{5EB7}"), (0x8D4F, "\u{5F18}"), (0x8D50, "\u{6052}"),
    (0x8D51, "\u{614C}"), (0x8D52, "\u{6297}"), (0x8D53, "\u{62D8}"), (0x8D54, "\u{63A7}"),
    (0x8D55, "\u{653B}"), (0x8D56, "\u{6602}"), (0x8D57, "\u{6643}"), (0x8D58, "\u{66F4}"),
    (0x8D59, "\u{676D}"), (0x8D5A, "\u{6821}"), (0x8D5B, "\u{6897}"), (0x8D5C, "\u{69CB}"),
    (0x8D5D, "\u{6C5F}"), (0x8D5E, "\u{6D2A}"), (0x8D5F, "\u{6D69}"), (0x8D60, "\u{6E2F}"),
    (0x8D61, "\u{6E9D}"), (0x8D62, "\u{7532}"), (0x8D63, "\u{7687}"), (0x8D64, "\u{786C}"),
    (0x8D65, "\u{7A3F}"), (0x8D66, "\u{7CE0}"), (0x8D67, "\u{7D05}"), (0x8D68, "\u{7D18}"),
    (0x8D69, "\u{7D5E}"), (0x8D6A, "\u{7DB1}"), (0x8D6B, "\u{8015}"), (0x8D6C, "\u{8003}"),
    (0x8D6D, "\u{80AF}"), (0x8D6E, "\u{80B1}"), (0x8D6F, "\u{8154}"), (0x8D70, "\u{818F}"),
    (0x8D71, "\u{822A}"), (0x8D72, "\u{8352}"), (0x8D73, "\u{884C}"), (0x8D74, "\u{8861}"),
    (0x8D75, "\u{8B1B}"), (0x8D76, "\u{8CA2}"), (0x8D77, "\u{8CFC}"), (0x8D78, "\u{90CA}"),
    (0x8D79, "\u{9175}"), (0x8D7A, "\u{9271}"), (0x8D7B, "\u{783F}"), (0x8D7C, "\u{92FC}"),
    (0x8D7D, "\u{95A4}"), (0x8D7E, "\u{964D}"), (0x8D80, "\u{9805}"), (0x8D81, "\u{9999}"),
    (0x8D82, "\u{9AD8}"), (0x8D83, "\u{9D3B}"), (0x8D84, "\u{525B}"), (0x8D85, "\u{52AB}"),
    (0x8D86, "\u{53F7}"), (0x8D87, "\u{5408}"), (0x8D88, "\u{58D5}"), (0x8D89, "\u{62F7}"),
    (0x8D8A, "\u{6FE0}"), (0x8D8B, "\u{8C6A}"), (0x8D8C, "\u{8F5F}"), (0x8D8D, "\u{9EB9}"),
    (0x8D8E, "\u{514B}"), (0x8D8F, "\u{523B}"), (0x8D90, "\u{544A}"), (0x8D91, "\u{56FD}"),
    (0x8D92, "\u{7A40}"), (0x8D93, "\u{9177}"), (0x8D94, "\u{9D60}"), (0x8D95, "\u{9ED2}"),
    (0x8D96, "\u{7344}"), (0x8D97, "\u{6F09}"), (0x8D98, "\u{8170}"), (0x8D99, "\u{7511}"),
    (0x8D9A, "\u{5FFD}"), (0x8D9B, "\u{60DA}"), (0x8D9C, "\u{9AA8}"), (0x8D9D, "\u{72DB}"),
    (0x8D9E, "\u{8FBC}"), (0x8D9F, "\u{6B64}"), (0x8DA0, "\u{9803}"), (0x8DA1, "\u{4ECA}"),
    (0x8DA2, "\u{56F0}"), (0x8DA3, "\u{5764}"), (0x8DA4, "\u{58BE}"), (0x8DA5, "\u{5A5A}"),
    (0x8DA6, "\u{6068}"), (0x8DA7, "\u{61C7}"), (0x8DA8, "\u{660F}"), (0x8DA9, "\u{6606}"),
    (0x8DAA, "\u{6839}"), (0x8DAB, "\u{68B1}"), (0x8DAC, "\u{6DF7}"), (0x8DAD, "\u{75D5}"),
    (0x8DAE, "\u{7D3A}"), (0x8DAF, "\u{826E}"), (0x8DB0, "\u{9B42}"), (0x8DB1, "\u{4E9B}"),
    (0x8DB2, "\u{4F50}"), (0x8DB3, "\u{53C9}"), (0x8DB4, "\u{5506}"), (0x8DB5, "\u{5D6F}"),
    (0x8DB6, "\u{5DE6}"), (0x8DB7, "\u{5DEE}"), (0x8DB8, "\u{67FB}"), (0x8DB9, "\u{6C99}"),
    (0x8DBA, "\u{7473}"), (0x8DBB, "\u{7802}"), (0x8DBC, "\u{8A50}"), (0x8DBD, "\u{9396}"),
    (0x8DBE, "\u{88DF}"), (0x8DBF, "\u{5750}"), (0x8DC0, "\u{5EA7}"), (0x8DC1, "\u{632B}"),
    (0x8DC2, "\u{50B5}"), (0x8DC3, "\u{50AC}"), (0x8DC4, "\u{518D}"), (0x8DC5, "\u{6700}"),
    (0x8DC6, "\u{54C9}"), (0x8DC7, "\u{585E}"), (0x8DC8, "\u{59BB}"), (0x8DC9, "\u{5BB0}"),
    (0x8DCA, "\u{5F69}"), (0x8DCB, "\u{624D}"), (0x8DCC, "\u{63A1}"), (0x8DCD, "\u{683D}"),
    (0x8DCE, "\u{6B73}"), (0x8DCF, "\u{6E08}"), (0x8DD0, "\u{707D}"), (0x8DD1, "\u{91C7}"),
    (0x8DD2, "\u{7280}"), (0x8DD3, "\u{7815}"), (0x8DD4, "\u{7826}"), (0x8DD5, "\u{796D}"),
    (0x8DD6, "\u{658E}"), (0x8DD7, "\u{7D30}"), (0x8DD8, "\u{83DC}"), (0x8DD9, "\u{88C1}"),
    (0x8DDA, "\u{8F09}"), (0x8DDB, "\u{969B}"), (0x8DDC, "\u{5264}"), (0x8DDD, "\u{5728}"),
    (0x8DDE, "\u{6750}"), (0x8DDF, "\u{7F6A}"), (0x8DE0, "\u{8CA1}"), (0x8DE1, "\u{51B4}"),
    (0x8DE2, "\u{5742}"), (0x8DE3, "\u{962A}"), (0x8DE4, "\u{583A}"), (0x8DE5, "\u{698A}"),
    (0x8DE6, "\u{80B4}"), (0x8DE7, "\u{54B2}"), (0x8DE8, "\u{5D0E}"), (0x8DE9, "\u{57FC}"),
    (0x8DEA, "\u{7895}"), (0x8DEB, "\u{9DFA}"), (0x8DEC, "\u{4F5C}"), (0x8DED, "\u{524A}"),
    (0x8DEE, "\u{548B}"), (0x8DEF, "\u{643E}"), (0x8DF0, "\u{6628}"), (0x8DF1, "\u{6714}"),
    (0x8DF2, "\u{67F5}"), (0x8DF3, "\u{7A84}"), (0x8DF4, "\u{7B56}"), (0x8DF5, "\u{7D22}"),
    (0x8DF6, "\u{932F}"), (0x8DF7, "\u{685C}"), (0x8DF8, "\u{9BAD}"), (0x8DF9, "\u{7B39}"),
    (0x8DFA, "\u{5319}"), (0x8DFB, "\u{518A}"), (0x8DFC, "\u{5237}"), (0x8E40, "\u{5BDF}"),
    (0x8E41, "\u{62F6}"), (0x8E42, "\u{64AE}"), (0x8E43, "\u{64E6}"), (0x8E44, "\u{672D}"),
    (0x8E45, "\u{6BBA}"), (0x8E46, "\u{85A9}"), (0x8E47, "\u{96D1}"), (0x8E48, "\u{7690}"),
    (0x8E49, "\u{9BD6}"), (0x8E4A, "\u{634C}"), (0x8E4B, "\u{9306}"), (0x8E4C, "\u{9BAB}"),
    (0x8E4D, "\u{76BF}"), (0x8E4E, "\u{6652}"), (0x8E4F, "\u{4E09}"), (0x8E50, "\u{5098}"),
    (0x8E51, "\u{53C2}"), (0x8E52, "\u{5C71}"), (0x8E53, "\u{60E8}"), (0x8E54, "\u{6492}"),
    (0x8E55, "\u{6563}"), (0x8E56, "\u{685F}"), (0x8E57, "\u{71E6}"), (0x8E58, "\u{73CA}"),
    (0x8E59, "\u{7523}"), (0x8E5A, "\u{7B97}"), (0x8E5B, "\u{7E82}"), (0x8E5C, "\u{8695}"),
    (0x8E5D, "\u{8B83}"), (0x8E5E, "\u{8CDB}"), (0x8E5F, "\u{9178}"), (0x8E60, "\u{9910}"),
    (0x8E61, "\u{65AC}"), (0x8E62, "\u{66AB}"), (0x8E63, "\u{6B8B}"), (0x8E64, "\u{4ED5}"),
    (0x8E65, "\u{4ED4}"), (0x8E66, "\u{4F3A}"), (0x8E67, "\u{4F7F}"), (0x8E68, "\u{523A}"),
    (0x8E69, "\u{53F8}"), (0x8E6A, "\u{53F2}"), (0x8E6B, "\u{55E3}"), (0x8E6C, "\u{56DB}"),
    (0x8E6D, "\u{58EB}"), (0x8E6E, "\u{59CB}"), (0x8E6F, "\u{59C9}"), (0x8E70, "\u{59FF}"),
    (0x8E71, "\u{5B50}"), (0x8E72, "\u{5C4D}"), (0x8E73, "\u{5E02}"), (0x8E74, "\u{5E2B}"),
    (0x8E75, "\u{5FD7}"), (0x8E76, "\u{601D}"), (0x8E77, "\u{6307}"), (0x8E78, "\u{652F}"),
    (0x8E79, "\u{5B5C}"), (0x8E7A, "\u{65AF}"), (0x8E7B, "\u{65BD}"), (0x8E7C, "\u{65E8}"),
    (0x8E7D, "\u{679D}"), (0x8E7E, "\u{6B62}"), (0x8E80, "\u{6B7B}"), (0x8E81, "\u{6C0F}"),
    (0x8E82, "\u{7345}"), (0x8E83, "\u{7949}"), (0x8E84, "\u{79C1}"), (0x8E85, "\u{7CF8}"),
    (0x8E86, "\u{7D19}"), (0x8E87, "\u{7D2B}"), (0x8E88, "\u{80A2}"), (0x8E89, "\u{8102}"),
    (0x8E8A, "\u{81F3}"), (0x8E8B, "\u{8996}"), (0x8E8C, "\u{8A5E}"), (0x8E8D, "\u{8A69}"),
    (0x8E8E, "\u{8A66}"), (0x8E8F, "\u{8A8C}"), (0x8E90, "\u{8AEE}"), (0x8E91, "\u{8CC7}"),
    (0x8E92, "\u{8CDC}"), (0x8E93, "\u{96CC}"), (0x8E94, "\u{98FC}"), (0x8E95, "\u{6B6F}"),
    (0x8E96, "\u{4E8B}"), (0x8E97, "\u{4F3C}"), (0x8E98, "\u{4F8D}"), (0x8E99, "\u{5150}"),
    (0x8E9A, "\u{5B57}"), (0x8E9B, "\u{5BFA}"), (0x8E9C, "\u{6148}"), (0x8E9D, "\u{6301}"),
    (0x8E9E, "\u{6642}"), (0x8E9F, "\u{6B21}"), (0x8EA0, "\u{6ECB}"), (0x8EA1, "\u{6CBB}"),
    (0x8EA2, "\u{723E}"), (0x8EA3, "\u{74BD}"), (0x8EA4, "\u{75D4}"), (0x8EA5, "\u{78C1}"),
    (0x8EA6, "\u{793A}"), (0x8EA7, "\u{800C}"), (0x8EA8, "\u{8033}"), (0x8EA9, "\u{81EA}"),
    (0x8EAA, "\u{8494}"), (0x8EAB, "\u{8F9E}"), (0x8EAC, "\u{6C50}"), (0x8EAD, "\u{9E7F}"),
    (0x8EAE, "\u{5F0F}"), (0x8EAF, "\u{8B58}"), (0x8EB0, "\u{9D2B}"), (0x8EB1, "\u{7AFA}"),
    (0x8EB2, "\u{8EF8}"), (0x8EB3, "\u{5B8D}"), (0x8EB4, "\u{96EB}"), (0x8EB5, "\u{4E03}"),
    (0x8EB6, "\u{53F1}"), (0x8EB7, "\u{57F7}"), (0x8EB8, "\u{5931}"), (0x8EB9, "\u{5AC9}"),
    (0x8EBA, "\u{5BA4}"), (0x8EBB, "\u{6089}"), (0x8EBC, "\u{6E7F}"), (0x8EBD, "\u{6F06}"),
    (0x8EBE, "\u{75BE}"), (0x8EBF, "\u{8CEA}"), (0x8EC0, "\u{5B9F}"), (0x8EC1, "\u{8500}"),
    (0x8EC2, "\u{7BE0}"), (0x8EC3, "\u{5072}"), (0x8EC4, "\u{67F4}"), (0x8EC5, "\u{829D}"),
    (0x8EC6, "\u{5C61}"), (0x8EC7, "\u{854A}"), (0x8EC8, "\u{7E1E}"), (0x8EC9, "\u{820E}"),
    (0x8ECA, "\u{5199}"), (0x8ECB, "\u{5C04}"), (0x8ECC, "\u{6368}"), (0x8ECD, "\u{8D66}"),
    (0x8ECE, "\u{659C}"), (0x8ECF, "\u{716E}"), (0x8ED0, "\u{793E}"), (0x8ED1, "\u{7D17}"),
    (0x8ED2, "\u{8005}"), (0x8ED3, "\u{8B1D}"), (0x8ED4, "\u{8ECA}"), (0x8ED5, "\u{906E}"),
    (0x8ED6, "\u{86C7}"), (0x8ED7, "\u{90AA}"), (0x8ED8, "\u{501F}"), (0x8ED9, "\u{52FA}"),
    (0x8EDA, "\u{5C3A}"), (0x8EDB, "\u{6753}"), (0x8EDC, "\u{707C}"), (0x8EDD, "\u{7235}"),
    (0x8EDE, "\u{914C}"), (0x8EDF, "\u{91C8}"), (0x8EE0, "\u{932B}"), (0x8EE1, "\u{82E5}"),
    (0x8EE2, "\u{5BC2}"), (0x8EE3, "\u{5F31}"), (0x8EE4, "\u{60F9}"), (0x8EE5, "\u{4E3B}"),
    (0x8EE6, "\u{53D6}"), (0x8EE7, "\u{5B88}"), (0x8EE8, "\u{624B}"), (0x8EE9, "\u{6731}"),
    (0x8EEA, "\u{6B8A}"), (0x8EEB, "\u{72E9}"), (0x8EEC, "\u{73E0}"), (0x8EED, "\u{7A2E}"),
    (0x8EEE, "\u{816B}"), (0x8EEF, "\u{8DA3}"), (0x8EF0, "\u{9152}"), (0x8EF1, "\u{9996}"),
    (0x8EF2, "\u{5112}"), (0x8EF3, "\u{53D7}"), (0x8EF4, "\u{546A}"), (0x8EF5, "\u{5BFF}"),
    (0x8EF6, "\u{6388}"), (0x8EF7, "\u{6A39}"), (0x8EF8, "\u{7DAC}"), (0x8EF9, "\u{9700}"),
    (0x8EFA, "\u{56DA}"), (0x8EFB, "\u{53CE}"), (0x8EFC, "\u{5468}"), (0x8F40, "\u{5B97}"),
    (0x8F41, "\u{5C31}"), (0x8F42, "\u{5DDE}"), (0x8F43, "\u{4FEE}"), (0x8F44, "\u{6101}"),
    (0x8F45, "\u{62FE}"), (0x8F46, "\u{6D32}"), (0x8F47, "\u{79C0}"), (0x8F48, "\u{79CB}"),
    (0x8F49, "\u{7D42}"), (0x8F4A, "\u{7E4D}"), (0x8F4B, "\u{7FD2}"), (0x8F4C, "\u{81ED}"),
    (0x8F4D, "\u{821F}"), (0x8F4E, "\u{8490}"), (0x8F4F, "\u{8846}"), (0x8F50, "\u{8972}"),
    (0x8F51, "\u{8B90}"), (0x8F52, "\u{8E74}"), (0x8F53, "\u{8F2F}"), (0x8F54, "\u{9031}"),
    (0x8F55, "\u{914B}"), (0x8F56, "\u{916C}"), (0x8F57, "\u{96C6}"), (0x8F58, "\u{919C}"),
    (0x8F59, "\u{4EC0}"), (0x8F5A, "\u{4F4F}"), (0x8F5B, "\u{5145}"), (0x8F5C, "\u{5341}"),
    (0x8F5D, "\u{5F93}"), (0x8F5E, "\u{620E}"), (0x8F5F, "\u{67D4}"), (0x8F60, "\u{6C41}"),
    (0x8F61, "\u{6E0B}"), (0x8F62, "\u{7363}"), (0x8F63, "\u{7E26}"), (0x8F64, "\u{91CD}"),
    (0x8F65, "\u{9283}"), (0x8F66, "\u{53D4}"), (0x8F67, "\u{5919}"), (0x8F68, "\u{5BBF}"),
    (0x8F69, "\u{6DD1}"), (0x8F6A, "\u{795D}"), (0x8F6B, "\u{7E2E}"), (0x8F6C, "\u{7C9B}"),
    (0x8F6D, "\u{587E}"), (0x8F6E, "\u{719F}"), (0x8F6F, "\u{51FA}"), (0x8F70, "\u{8853}"),
    (0x8F71, "\u{8FF0}"), (0x8F72, "\u{4FCA}"), (0x8F73, "\u{5CFB}"), (0x8F74, "\u{6625}"),
    (0x8F75, "\u{77AC}"), (0x8F76, "\u{7AE3}"), (0x8F77, "\u{821C}"), (0x8F78, "\u{99FF}"),
    (0x8F79, "\u{51C6}"), (0x8F7A, "\u{5FAA}"), (0x8F7B, "\u{65EC}"), (0x8F7C, "\u{696F}"),
    (0x8F7D, "\u{6B89}"), (0x8F7E, "\u{6DF3}"), (0x8F80, "\u{6E96}"), (0x8F81, "\u{6F64}"),
    (0x8F82, "\u{76FE}"), (0x8F83, "\u{7D14}"), (0x8F84, "\u{5DE1}"), (0x8F85, "\u{9075}"),
    (0x8F86, "\u{9187}"), (0x8F87, "\u{9806}"), (0x8F88, "\u{51E6}"), (0x8F89, "\u{521D}"),
    (0x8F8A, "\u{6240}"), (0x8F8B, "\u{6691}"), (0x8F8C, "\u{66D9}"), (0x8F8D, "\u{6E1A}"),
    (0x8F8E, "\u{5EB6}"), (0x8F8F, "\u{7DD2}"), (0x8F90, "\u{7F72}"), (0x8F91, "\u{66F8}"),
    (0x8F92, "\u{85AF}"), (0x8F93, "\u{85F7}"), (0x8F94, "\u{8AF8}"), (0x8F95, "\u{52A9}"),
    (0x8F96, "\u{53D9}"), (0x8F97, "\u{5973}"), (0x8F98, "\u{5E8F}"), (0x8F99, "\u{5F90}"),
    (0x8F9A, "\u{6055}"), (0x8F9B, "\u{92E4}"), (0x8F9C, "\u{9664}"), (0x8F9D, "\u{50B7}"),
    (0x8F9E, "\u{511F}"), (0x8F9F, "\u{52DD}"), (0x8FA0, "\u{5320}"), (0x8FA1, "\u{5347}"),
    (0x8FA2, "\u{53EC}"), (0x8FA3, "\u{54E8}"), (0x8FA4, "\u{5546}"), (0x8FA5, "\u{5531}"),
    (0x8FA6, "\u{5617}"), (0x8FA7, "\u{5968}"), (0x8FA8, "\u{59BE}"), (0x8FA9, "\u{5A3C}"),
    (0x8FAA, "\u{5BB5}"), (0x8FAB, "\u{5C06}"), (0x8FAC, "\u{5C0F}"), (0x8FAD, "\u{5C11}"),
    (0x8FAE, "\u{5C1A}"), (0x8FAF, "\u{5E84}"), (0x8FB0, "\u{5E8A}"), (0x8FB1, "\u{5EE0}"),
    (0x8FB2, "\u{5F70}"), (0x8FB3, "\u{627F}"), (0x8FB4, "\u{6284}"), (0x8FB5, "\u{62DB}"),
    (0x8FB6, "\u{638C}"), (0x8FB7, "\u{6377}"), (0x8FB8, "\u{6607}"), (0x8FB9, "\u{660C}"),
    (0x8FBA, "\u{662D}"), (0x8FBB, "\u{6676}"), (0x8FBC, "\u{677E}"), (0x8FBD, "\u{68A2}"),
    (0x8FBE, "\u{6A1F}"), (0x8FBF, "\u{6A35}"), (0x8FC0, "\u{6CBC}"), (0x8FC1, "\u{6D88}"),
    (0x8FC2, "\u{6E09}"), (0x8FC3, "\u{6E58}"), (0x8FC4, "\u{713C}"), (0x8FC5, "\u{7126}"),
    (0x8FC6, "\u{7167}"), (0x8FC7, "\u{75C7}"), (0x8FC8, "\u{7701}"), (0x8FC9, "\u{785D}"),
    (0x8FCA, "\u{7901}"), (0x8FCB, "\u{7965}"), (0x8FCC, "\u{79F0}"), (0x8FCD, "\u{7AE0}"),
    (0x8FCE, "\u{7B11}"), (0x8FCF, "\u{7CA7}"), (0x8FD0, "\u{7D39}"), (0x8FD1, "\u{8096}"),
    (0x8FD2, "\u{83D6}"), (0x8FD3, "\u{848B}"), (0x8FD4, "\u{8549}"), (0x8FD5, "\u{885D}"),
    (0x8FD6, "\u{88F3}"), (0x8FD7, "\u{8A1F}"), (0x8FD8, "\u{8A3C}"), (0x8FD9, "\u{8A54}"),
    (0x8FDA, "\u{8A73}"), (0x8FDB, "\u{8C61}"), (0x8FDC, "\u{8CDE}"), (0x8FDD, "\u{91A4}"),
    (0x8FDE, "\u{9266}"), (0x8FDF, "\u{937E}"), (0x8FE0, "\u{9418}"), (0x8FE1, "\u{969C}"),
    (0x8FE2, "\u{9798}"), (0x8FE3, "\u{4E0A}"), (0x8FE4, "\u{4E08}"), (0x8FE5, "\u{4E1E}"),
    (0x8FE6, "\u{4E57}"), (0x8FE7, "\u{5197}"), (0x8FE8, "\u{5270}"), (0x8FE9, "\u{57CE}"),
    (0x8FEA, "\u{5834}"), (0x8FEB, "\u{58CC}"), (0x8FEC, "\u{5B22}"), (0x8FED, "\u{5E38}"),
    (0x8FEE, "\u{60C5}"), (0x8FEF, "\u{64FE}"), (0x8FF0, "\u{6761}"), (0x8FF1, "\u{6756}"),
    (0x8FF2, "\u{6D44}"), (0x8FF3, "\u{72B6}"), (0x8FF4, "\u{7573}"), (0x8FF5, "\u{7A63}"),
    (0x8FF6, "\u{84B8}"), (0x8FF7, "\u{8B72}"), (0x8FF8, "\u{91B8}"), (0x8FF9, "\u{9320}"),
    (0x8FFA, "\u{5631}"), (0x8FFB, "\u{57F4}"), (0x8FFC, "\u{98FE}"), (0x9040, "\u{62ED}"),
    (0x9041, "\u{690D}"), (0x9042, "\u{6B96}"), (0x9043, "\u{71ED}"), (0x9044, "\u{7E54}"),
    (0x9045, "\u{8077}"), (0x9046, "\u{8272}"), (0x9047, "\u{89E6}"), (0x9048, "\u{98DF}"),
    (0x9049, "\u{8755}"), (0x904A, "\u{8FB1}"), (0x904B, "\u{5C3B}"), (0x904C, "\u{4F38}"),
    (0x904D, "\u{4FE1}"), (0x904E, "\u{4FB5}"), (0x904F, "\u{5507}"), (0x9050, "\u{5A20}"),
    (0x9051, "\u{5BDD}"), (0x9052, "\u{5BE9}"), (0x9053, "\u{5FC3}"), (0x9054, "\u{614E}"),
    (0x9055, "\u{632F}"), (0x9056, "\u{65B0}"), (0x9057, "\u{664B}"), (0x9058, "\u{68EE}"),
    (0x9059, "\u{699B}"), (0x905A, "\u{6D78}"), (0x905B, "\u{6DF1}"), (0x905C, "\u{7533}"),
    (0x905D, "\u{75B9}"), (0x905E, "\u{771F}"), (0x905F, "\u{795E}"), (0x9060, "\u{79E6}"),
    (0x9061, "\u{7D33}"), (0x9062, "\u{81E3}"), (0x9063, "\u{82AF}"), (0x9064, "\u{85AA}"),
    (0x9065, "\u{89AA}"), (0x9066, "\u{8A3A}"), (0x9067, "\u{8EAB}"), (0x9068, "\u{8F9B}"),
    (0x9069, "\u{9032}"), (0x906A, "\u{91DD}"), (0x906B, "\u{9707}"), (0x906C, "\u{4EBA}"),
    (0x906D, "\u{4EC1}"), (0x906E, "\u{5203}"), (0x906F, "\u{5875}"), (0x9070, "\u{58EC}"),
    (0x9071, "\u{5C0B}"), (0x9072, "\u{751A}"), (0x9073, "\u{5C3D}"), (0x9074, "\u{814E}"),
    (0x9075, "\u{8A0A}"), (0x9076, "\u{8FC5}"), (0x9077, "\u{9663}"), (0x9078, "\u{976D}"),
    (0x9079, "\u{7B25}"), (0x907A, "\u{8ACF}"), (0x907B, "\u{9808}"), (0x907C, "\u{9162}"),
    (0x907D, "\u{56F3}"), (0x907E, "\u{53A8}"), (0x9080, "\u{9017}"), (0x9081, "\u{5439}"),
    (0x9082, "\u{5782}"), (0x9083, "\u{5E25}"), (0x9084, "\u{63A8}"), (0x9085, "\u{6C34}"),
    (0x9086, "\u{708A}"), (0x9087, "\u{7761}"), (0x9088, "\u{7C8B}"), (0x9089, "\u{7FE0}"),
    (0x908A, "\u{8870}"), (0x908B, "\u{9042}"), (0x908C, "\u{9154}"), (0x908D, "\u{9310}"),
    (0x908E, "\u{9318}"), (0x908F, "\u{968F}"), (0x9090, "\u{745E}"), (0x9091, "\u{9AC4}"),
    (0x9092, "\u{5D07}"), (0x9093, "\u{5D69}"), (0x9094, "\u{6570}"), (0x9095, "\u{67A2}"),
    (0x9096, "\u{8DA8}"), (0x9097, "\u{96DB}"), (0x9098, "\u{636E}"), (0x9099, "\u{6749}"),
    (0x909A, "\u{6919}"), (0x909B, "\u{83C5}"), (0x909C, "\u{9817}"), (0x909D, "\u{96C0}"),
    (0x909E, "\u{88FE}"), (0x909F, "\u{6F84}"), (0x90A0, "\u{647A}"), (0x90A1, "\u{5BF8}"),
    (0x90A2, "\u{4E16}"), (0x90A3, "\u{702C}"), (0x90A4, "\u{755D}"), (0x90A5, "\u{662F}"),
    (0x90A6, "\u{51C4}"), (0x90A7, "\u{5236}"), (0x90A8, "\u{52E2}"), (0x90A9, "\u{59D3}"),
    (0x90AA, "\u{5F81}"), (0x90AB, "\u{6027}"), (0x90AC, "\u{6210}"), (0x90AD, "\u{653F}"),
    (0x90AE, "\u{6574}"), (0x90AF, "\u{661F}"), (0x90B0, "\u{6674}"), (0x90B1, "\u{68F2}"),
    (0x90B2, "\u{6816}"), (0x90B3, "\u{6B63}"), (0x90B4, "\u{6E05}"), (0x90B5, "\u{7272}"),
    (0x90B6, "\u{751F}"), (0x90B7, "\u{76DB}"), (0x90B8, "\u{7CBE}"), (0x90B9, "\u{8056}"),
    (0x90BA, "\u{58F0}"), (0x90BB, "\u{88FD}"), (0x90BC, "\u{897F}"), (0x90BD, "\u{8AA0}"),
    (0x90BE, "\u{8A93}"), (0x90BF, "\u{8ACB}"), (0x90C0, "\u{901D}"), (0x90C1, "\u{9192}"),
    (0x90C2, "\u{9752}"), (0x90C3, "\u{9759}"), (0x90C4, "\u{6589}"), (0x90C5, "\u{7A0E}"),
    (0x90C6, "\u{8106}"), (0x90C7, "\u{96BB}"), (0x90C8, "\u{5E2D}"), (0x90C9, "\u{60DC}"),
    (0x90CA, "\u{621A}"), (0x90CB, "\u{65A5}"), (0x90CC, "\u{6614}"), (0x90CD, "\u{6790}"),
    (0x90CE, "\u{77F3}"), (0x90CF, "\u{7A4D}"), (0x90D0, "\u{7C4D}"), (0x90D1, "\u{7E3E}"),
    (0x90D2, "\u{810A}"), (0x90D3, "\u{8CAC}"), (0x90D4, "\u{8D64}"), (0x90D5, "\u{8DE1}"),
    (0x90D6, "\u{8E5F}"), (0x90D7, "\u{78A9}"), (0x90D8, "\u{5207}"), (0x90D9, "\u{62D9}"),
    (0x90DA, "\u{63A5}"), (0x90DB, "\u{6442}"), (0x90DC, "\u{6298}"), (0x90DD, "\u{8A2D}"),
    (0x90DE, "\u{7A83}"), (0x90DF, "\u{7BC0}"), (0x90E0, "\u{8AAC}"), (0x90E1, "\u{96EA}"),
    (0x90E2, "\u{7D76}"), (0x90E3, "\u{820C}"), (0x90E4, "\u{8749}"), (0x90E5, "\u{4ED9}"),
    (0x90E6, "\u{5148}"), (0x90E7, "\u{5343}"), (0x90E8, "\u{5360}"), (0x90E9, "\u{5BA3}"),
    (0x90EA, "\u{5C02}"), (0x90EB, "\u{5C16}"), (0x90EC, "\u{5DDD}"), (0x90ED, "\u{6226}"),
    (0x90EE, "\u{6247}"), (0x90EF, "\u{64B0}"), (0x90F0, "\u{6813}"), (0x90F1, "\u{6834}"),
    (0x90F2, "\u{6CC9}"), (0x90F3, "\u{6D45}"), (0x90F4, "\u{6D17}"), (0x90F5, "\u{67D3}"),
    (0x90F6, "\u{6F5C}"), (0x90F7, "\u{714E}"), (0x90F8, "\u{717D}"), (0x90F9, "\u{65CB}"),
    (0x90FA, "\u{7A7F}"), (0x90FB, "\u{7BAD}"), (0x90FC, "\u{7DDA}"), (0x9140, "\u{7E4A}"),
    (0x9141, "\u{7FA8}"), (0x9142, "\u{817A}"), (0x9143, "\u{821B}"), (0x9144, "\u{8239}"),
    (0x9145, "\u{85A6}"), (0x9146, "\u{8A6E}"), (0x9147, "\u{8CCE}"), (0x9148, "\u{8DF5}"),
    (0x9149, "\u{9078}"), (0x914A, "\u{9077}"), (0x914B, "\u{92AD}"), (0x914C, "\u{9291}"),
    (0x914D, "\u{9583}"), (0x914E, "\u{9BAE}"), (0x914F, "\u{524D}"), (0x9150, "\u{5584}"),
    (0x9151, "\u{6F38}"), (0x9152, "\u{7136}"), (0x9153, "\u{5168}"), (0x9154, "\u{7985}"),
    (0x9155, "\u{7E55}"), (0x9156, "\u{81B3}"), (0x9157, "\u{7CCE}"), (0x9158, "\u{564C}"),
    (0x9159, "\u{5851}"), (0x915A, "\u{5CA8}"), (0x915B, "\u{63AA}"), (0x915C, "\u{66FE}"),
    (0x915D, "\u{66FD}"), (0x915E, "\u{695A}"), (0x915F, "\u{72D9}"), (0x9160, "\u{758F}"),
    (0x9161, "\u{758E}"), (0x9162, "\u{790E}"), (0x9163, "\u{7956}"), (0x9164, "\u{79DF}"),
    (0x9165, "\u{7C97}"), (0x9166, "\u{7D20}"), (0x9167, "\u{7D44}"), (0x9168, "\u{8607}"),
    (0x9169, "\u{8A34}"), (0x916A, "\u{963B}"), (0x916B, "\u{9061}"), (0x916C, "\u{9F20}"),
    (0x916D, "\u{50E7}"), (0x916E, "\u{5275}"), (0x916F, "\u{53CC}"), (0x9170, "\u{53E2}"),
    (0x9171, "\u{5009}"), (0x9172, "\u{55AA}"), (0x9173, "\u{58EE}"), (0x9174, "\u{594F}"),
    (0x9175, "\u{723D}"), (0x9176, "\u{5B8B}"), (0x9177, "\u{5C64}"), (0x9178, "\u{531D}"),
    (0x9179, "\u{60E3}"), (0x917A, "\u{60F3}"), (0x917B, "\u{635C}"), (0x917C, "\u{6383}"),
    (0x917D, "\u{633F}"), (0x917E, "\u{63BB}"), (0x9180, "\u{64CD}"), (0x9181, "\u{65E9}"),
    (0x9182, "\u{66F9}"), (0x9183, "\u{5DE3}"), (0x9184, "\u{69CD}"), (0x9185, "\u{69FD}"),
    (0x9186, "\u{6F15}"), (0x9187, "\u{71E5}"), (0x9188, "\u{4E89}"), (0x9189, "\u{75E9}"),
    (0x918A, "\u{76F8}"), (0x918B, "\u{7A93}"), (0x918C, "\u{7CDF}"), (0x918D, "\u{7DCF}"),
    (0x918E, "\u{7D9C}"), (0x918F, "\u{8061}"), (0x9190, "\u{8349}"), (0x9191, "\u{8358}"),
    (0x9192, "\u{846C}"), (0x9193, "\u{84BC}"), (0x9194, "\u{85FB}"), (0x9195, "\u{88C5}"),
    (0x9196, "\u{8D70}"), (0x9197, "\u{9001}"), (0x9198, "\u{906D}"), (0x9199, "\u{9397}"),
    (0x919A, "\u{971C}"), (0x919B, "\u{9A12}"), (0x919C, "\u{50CF}"), (0x919D, "\u{5897}"),
    (0x919E, "\u{618E}"), (0x919F, "\u{81D3}"), (0x91A0, "\u{8535}"), (0x91A1, "\u{8D08}"),
    (0x91A2, "\u{9020}"), (0x91A3, "\u{4FC3}"), (0x91A4, "\u{5074}"), (0x91A5, "\u{5247}"),
    (0x91A6, "\u{5373}"), (0x91A7, "\u{606F}"), (0x91A8, "\u{6349}"), (0x91A9, "\u{675F}"),
    (0x91AA, "\u{6E2C}"), (0x91AB, "\u{8DB3}"), (0x91AC, "\u{901F}"), (0x91AD, "\u{4FD7}"),
    (0x91AE, "\u{5C5E}"), (0x91AF, "\u{8CCA}"), (0x91B0, "\u{65CF}"), (0x91B1, "\u{7D9A}"),
    (0x91B2, "\u{5352}"), (0x91B3, "\u{8896}"), (0x91B4, "\u{5176}"), (0x91B5, "\u{63C3}"),
    (0x91B6, "\u{5B58}"), (0x91B7, "\u{5B6B}"), (0x91B8, "\u{5C0A}"), (0x91B9, "\u{640D}"),
    (0x91BA, "\u{6751}"), (0x91BB, "\u{905C}"), (0x91BC, "\u{4ED6}"), (0x91BD, "\u{591A}"),
    (0x91BE, "\u{592A}"), (0x91BF, "\u{6C70}"), (0x91C0, "\u{8A51}"), (0x91C1, "\u{553E}"),
    (0x91C2, "\u{5815}"), (0x91C3, "\u{59A5}"), (0x91C4, "\u{60F0}"), (0x91C5, "\u{6253}"),
    (0x91C6, "\u{67C1}"), (0x91C7, "\u{8235}"), (0x91C8, "\u{6955}"), (0x91C9, "\u{9640}"),
    (0x91CA, "\u{99C4}"), (0x91CB, "\u{9A28}"), (0x91CC, "\u{4F53}"), (0x91CD, "\u{5806}"),
    (0x91CE, "\u{5BFE}"), (0x91CF, "\u{8010}"), (0x91D0, "\u{5CB1}"), (0x91D1, "\u{5E2F}"),
    (0x91D2, "\u{5F85}"), (0x91D3, "\u{6020}"), (0x91D4, "\u{614B}"), (0x91D5, "\u{6234}"),
    (0x91D6, "\u{66FF}"), (0x91D7, "\u{6CF0}"), (0x91D8, "\u{6EDE}"), (0x91D9, "\u{80CE}"),
    (0x91DA, "\u{817F}"), (0x91DB, "\u{82D4}"), (0x91DC, "\u{888B}"), (0x91DD, "\u{8CB8}"),
    (0x91DE, "\u{9000}"), (0x91DF, "\u{902E}"), (0x91E0, "\u{968A}"), (0x91E1, "\u{9EDB}"),
    (0x91E2, "\u{9BDB}"), (0x91E3, "\u{4EE3}"), (0x91E4, "\u{53F0}"), (0x91E5, "\u{5927}"),
    (0x91E6, "\u{7B2C}"), (0x91E7, "\u{918D}"), (0x91E8, "\u{984C}"), (0x91E9, "\u{9DF9}"),
    (0x91EA, "\u{6EDD}"), (0x91EB, "\u{7027}"), (0x91EC, "\u{5353}"), (0x91ED, "\u{5544}"),
    (0x91EE, "\u{5B85}"), (0x91EF, "\u{6258}"), (0x91F0, "\u{629E}"), (0x91F1, "\u{62D3}"),
    (0x91F2, "\u{6CA2}"), (0x91F3, "\u{6FEF}"), (0x91F4, "\u{7422}"), (0x91F5, "\u{8A17}"),
    (0x91F6, "\u{9438}"), (0x91F7, "\u{6FC1}"), (0x91F8, "\u{8AFE}"), (0x91F9, "\u{8338}"),
    (0x91FA, "\u{51E7}"), (0x91FB, "\u{86F8}"), (0x91FC, "\u{53EA}"), (0x9240, "\u{53E9}"),
    (0x9241, "\u{4F46}"), (0x9242, "\u{9054}"), (0x9243, "\u{8FB0}"), (0x9244, "\u{596A}"),
    (0x9245, "\u{8131}"), (0x9246, "\u{5DFD}"), (0x9247, "\u{7AEA}"), (0x9248, "\u{8FBF}"),
    (0x9249, "\u{68DA}"), (0x924A, "\u{8C37}"), (0x924B, "\u{72F8}"), (0x924C, "\u{9C48}"),
    (0x924D, "\u{6A3D}"), (0x924E, "\u{8AB0}"), (0x924F, "\u{4E39}"), (0x9250, "\u{5358}"),
    (0x9251, "\u{5606}"), (0x9252, "\u{5766}"), (0x9253, "\u{62C5}"), (0x9254, "\u{63A2}"),
    (0x9255, "\u{65E6}"), (0x9256, "\u{6B4E}"), (0x9257, "\u{6DE1}"), (0x9258, "\u{6E5B}"),
    (0x9259, "\u{70AD}"), (0x925A, "\u{77ED}"), (0x925B, "\u{7AEF}"), (0x925C, "\u{7BAA}"),
    (0x925D, "\u{7DBB}"), (0x925E, "\u{803D}"), (0x925F, "\u{80C6}"), (0x9260, "\u{86CB}"),
    (0x9261, "\u{8A95}"), (0x9262, "\u{935B}"), (0x9263, "\u{56E3}"), (0x9264, "\u{58C7}"),
    (0x9265, "\u{5F3E}"), (0x9266, "\u{65AD}"), (0x9267, "\u{6696}"), (0x9268, "\u{6A80}"),
    (0x9269, "\u{6BB5}"), (0x926A, "\u{7537}"), (0x926B, "\u{8AC7}"), (0x926C, "\u{5024}"),
    (0x926D, "\u{77E5}"), (0x926E, "\u{5730}"), (0x926F, "\u{5F1B}"), (0x9270, "\u{6065}"),
    (0x9271, "\u{667A}"), (0x9272, "\u{6C60}"), (0x9273, "\u{75F4}"), (0x9274, "\u{7A1A}"),
    (0x9275, "\u{7F6E}"), (0x9276, "\u{81F4}"), (0x9277, "\u{8718}"), (0x9278, "\u{9045}"),
    (0x9279, "\u{99B3}"), (0x927A, "\u{7BC9}"), (0x927B, "\u{755C}"), (0x927C, "\u{7AF9}"),
    (0x927D, "\u{7B51}"), (0x927E, "\u{84C4}"), (0x9280, "\u{9010}"), (0x9281, "\u{79E9}"),
    (0x9282, "\u{7A92}"), (0x9283, "\u{8336}"), (0x9284, "\u{5AE1}"), (0x9285, "\u{7740}"),
    (0x9286, "\u{4E2D}"), (0x9287, "\u{4EF2}"), (0x9288, "\u{5B99}"), (0x9289, "\u{5FE0}"),
    (0x928A, "\u{62BD}"), (0x928B, "\u{663C}"), (0x928C, "\u{67F1}"), (0x928D, "\u{6CE8}"),
    (0x928E, "\u{866B}"), (0x928F, "\u{8877}"), (0x9290, "\u{8A3B}"), (0x9291, "\u{914E}"),
    (0x9292, "\u{92F3}"), (0x9293, "\u{99D0}"), (0x9294, "\u{6A17}"), (0x9295, "\u{7026}"),
    (0x9296, "\u{732A}"), (0x9297, "\u{82E7}"), (0x9298, "\u{8457}"), (0x9299, "\u{8CAF}"),
    (0x929A, "\u{4E01}"), (0x929B, "\u{5146}"), (0x929C, "\u{51CB}"), (0x929D, "\u{558B}"),
    (0x929E, "\u{5BF5}"), (0x929F, "\u{5E16}"), (0x92A0, "\u{5E33}"), (0x92A1, "\u{5E81}"),
    (0x92A2, "\u{5F14}"), (0x92A3, "\u{5F35}"), (0x92A4, "\u{5F6B}"), (0x92A5, "\u{5FB4}"),
    (0x92A6, "\u{61F2}"), (0x92A7, "\u{6311}"), (0x92A8, "\u{66A2}"), (0x92A9, "\u{671D}"),
    (0x92AA, "\u{6F6E}"), (0x92AB, "\u{7252}"), (0x92AC, "\u{753A}"), (0x92AD, "\u{773A}"),
    (0x92AE, "\u{8074}"), (0x92AF, "\u{8139}"), (0x92B0, "\u{8178}"), (0x92B1, "\u{8776}"),
    (0x92B2, "\u{8ABF}"), (0x92B3, "\u{8ADC}"), (0x92B4, "\u{8D85}"), (0x92B5, "\u{8DF3}"),
    (0x92B6, "\u{929A}"), (0x92B7, "\u{9577}"), (0x92B8, "\u{9802}"), (0x92B9, "\u{9CE5}"),
    (0x92BA, "\u{52C5}"), (0x92BB, "\u{6357}"), (0x92BC, "\u{76F4}"), (0x92BD, "\u{6715}"),
    (0x92BE, "\u{6C88}"), (0x92BF, "\u{73CD}"), (0x92C0, "\u{8CC3}"), (0x92C1, "\u{93AE}"),
    (0x92C2, "\u{9673}"), (0x92C3, "\u{6D25}"), (0x92C4, "\u{589C}"), (0x92C5, "\u{690E}"),
    (0x92C6, "\u{69CC}"), (0x92C7, "\u{8FFD}"), (0x92C8, "\u{939A}"), (0x92C9, "\u{75DB}"),
    (0x92CA, "\u{901A}"), (0x92CB, "\u{585A}"), (0x92CC, "\u{6802}"), (0x92CD, "\u{63B4}"),
    (0x92CE, "\u{69FB}"), (0x92CF, "\u{4F43}"), (0x92D0, "\u{6F2C}"), (0x92D1, "\u{67D8}"),
    (0x92D2, "\u{8FBB}"), (0x92D3, "\u{8526}"), (0x92D4, "\u{7DB4}"), (0x92D5, "\u{9354}"),
    (0x92D6, "\u{693F}"), (0x92D7, "\u{6F70}"), (0x92D8, "\u{576A}"), (0x92D9, "\u{58F7}"),
    (0x92DA, "\u{5B2C}"), (0x92DB, "\u{7D2C}"), (0x92DC, "\u{722A}"), (0x92DD, "\u{540A}"),
    (0x92DE, "\u{91E3}"), (0x92DF, "\u{9DB4}"), (0x92E0, "\u{4EAD}"), (0x92E1, "\u{4F4E}"),
    (0x92E2, "\u{505C}"), (0x92E3, "\u{5075}"), (0x92E4, "\u{5243}"), (0x92E5, "\u{8C9E}"),
    (0x92E6, "\u{5448}"), (0x92E7, "\u{5824}"), (0x92E8, "\u{5B9A}"), (0x92E9, "\u{5E1D}"),
    (0x92EA, "\u{5E95}"), (0x92EB, "\u{5EAD}"), (0x92EC, "\u{5EF7}"), (0x92ED, "\u{5F1F}"),
    (0x92EE, "\u{608C}"), (0x92EF, "\u{62B5}"), (0x92F0, "\u{633A}"), (0x92F1, "\u{63D0}"),
    (0x92F2, "\u{68AF}"), (0x92F3, "\u{6C40}"), (0x92F4, "\u{7887}"), (0x92F5, "\u{798E}"),
    (0x92F6, "\u{7A0B}"), (0x92F7, "\u{7DE0}"), (0x92F8, "\u{8247}"), (0x92F9, "\u{8A02}"),
    (0x92FA, "\u{8AE6}"), (0x92FB, "\u{8E44}"), (0x92FC, "\u{9013}"), (0x9340, "\u{90B8}"),
    (0x9341, "\u{912D}"), (0x9342, "\u{91D8}"), (0x9343, "\u{9F0E}"), (0x9344, "\u{6CE5}"),
    (0x9345, "\u{6458}"), (0x9346, "\u{64E2}"), (0x9347, "\u{6575}"), (0x9348, "\u{6EF4}"),
    (0x9349, "\u{7684}"), (0x934A, "\u{7B1B}"), (0x934B, "\u{9069}"), (0x934C, "\u{93D1}"),
    (0x934D, "\u{6EBA}"), (0x934E, "\u{54F2}"), (0x934F, "\u{5FB9}"), (0x9350, "\u{64A4}"),
    (0x9351, "\u{8F4D}"), (0x9352, "\u{8FED}"), (0x9353, "\u{9244}"), (0x9354, "\u{5178}"),
    (0x9355, "\u{586B}"), (0x9356, "\u{5929}"), (0x9357, "\u{5C55}"), (0x9358, "\u{5E97}"),
    (0x9359, "\u{6DFB}"), (0x935A, "\u{7E8F}"), (0x935B, "\u{751C}"), (0x935C, "\u{8CBC}"),
    (0x935D, "\u{8EE2}"), (0x935E, "\u{985B}"), (0x935F, "\u{70B9}"), (0x9360, "\u{4F1D}"),
    (0x9361, "\u{6BBF}"), (0x9362, "\u{6FB1}"), (0x9363, "\u{7530}"), (0x9364, "\u{96FB}"),
    (0x9365, "\u{514E}"), (0x9366, "\u{5410}"), (0x9367, "\u{5835}"), (0x9368, "\u{5857}"),
    (0x9369, "\u{59AC}"), (0x936A, "\u{5C60}"), (0x936B, "\u{5F92}"), (0x936C, "\u{6597}"),
    (0x936D, "\u{675C}"), (0x936E, "\u{6E21}"), (0x936F, "\u{767B}"), (0x9370, "\u{83DF}"),
    (0x9371, "\u{8CED}"), (0x9372, "\u{9014}"), (0x9373, "\u{90FD}"), (0x9374, "\u{934D}"),
    (0x9375, "\u{7825}"), (0x9376, "\u{783A}"), (0x9377, "\u{52AA}"), (0x9378, "\u{5EA6}"),
    (0x9379, "\u{571F}"), (0x937A, "\u{5974}"), (0x937B, "\u{6012}"), (0x937C, "\u{5012}"),
    (0x937D, "\u{515A}"), (0x937E, "\u{51AC}"), (0x9380, "\u{51CD}"), (0x9381, "\u{5200}"),
    (0x9382, "\u{5510}"), (0x9383, "\u{5854}"), (0x9384, "\u{5858}"), (0x9385, "\u{5957}"),
    (0x9386, "\u{5B95}"), (0x9387, "\u{5CF6}"), (0x9388, "\u{5D8B}"), (0x9389, "\u{60BC}"),
    (0x938A, "\u{6295}"), (0x938B, "\u{642D}"), (0x938C, "\u{6771}"), (0x938D, "\u{6843}"),
    (0x938E, "\u{68BC}"), (0x938F, "\u{68DF}"), (0x9390, "\u{76D7}"), (0x9391, "\u{6DD8}"),
    (0x9392, "\u{6E6F}"), (0x9393, "\u{6D9B}"), (0x9394, "\u{706F}"), (0x9395, "\u{71C8}"),
    (0x9396, "\u{5F53}"), (0x9397, "\u{75D8}"), (0x9398, "\u{7977}"), (0x9399, "\u{7B49}"),
    (0x939A, "\u{7B54}"), (0x939B, "\u{7B52}"), (0x939C, "\u{7CD6}"), (0x939D, "\u{7D71}"),
    (0x939E, "\u{5230}"), (0x939F, "\u{8463}"), (0x93A0, "\u{8569}"), (0x93A1, "\u{85E4}"),
    (0x93A2, "\u{8A0E}"), (0x93A3, "\u{8B04}"), (0x93A4, "\u{8C46}"), (0x93A5, "\u{8E0F}"),
    (0x93A6, "\u{9003}"), (0x93A7, "\u{900F}"), (0x93A8, "\u{9419}"), (0x93A9, "\u{9676}"),
    (0x93AA, "\u{982D}"), (0x93AB, "\u{9A30}"), (0x93AC, "\u{95D8}"), (0x93AD, "\u{50CD}"),
    (0x93AE, "\u{52D5}"), (0x93AF, "\u{540C}"), (0x93B0, "\u{5802}"), (0x93B1, "\u{5C0E}"),
    (0x93B2, "\u{61A7}"), (0x93B3, "\u{649E}"), (0x93B4, "\u{6D1E}"), (0x93B5, "\u{77B3}"),
    (0x93B6, "\u{7AE5}"), (0x93B7, "\u{80F4}"), (0x93B8, "\u{8404}"), (0x93B9, "\u{9053}"),
    (0x93BA, "\u{9285}"), (0x93BB, "\u{5CE0}"), (0x93BC, "\u{9D07}"), (0x93BD, "\u{533F}"),
    (0x93BE, "\u{5F97}"), (0x93BF, "\u{5FB3}"), (0x93C0, "\u{6D9C}"), (0x93C1, "\u{7279}"),
    (0x93C2, "\u{7763}"), (0x93C3, "\u{79BF}"), (0x93C4, "\u{7BE4}"), (0x93C5, "\u{6BD2}"),
    (0x93C6, "\u{72EC}"), (0x93C7, "\u{8AAD}"), (0x93C8, "\u{6803}"), (0x93C9, "\u{6A61}"),
    (0x93CA, "\u{51F8}"), (0x93CB, "\u{7A81}"), (0x93CC, "\u{6934}"), (0x93CD, "\u{5C4A}"),
    (0x93CE, "\u{9CF6}"), (0x93CF, "\u{82EB}"), (0x93D0, "\u{5BC5}"), (0x93D1, "\u{9149}"),
    (0x93D2, "\u{701E}"), (0x93D3, "\u{5678}"), (0x93D4, "\u{5C6F}"), (0x93D5, "\u{60C7}"),
    (0x93D6, "\u{6566}"), (0x93D7, "\u{6C8C}"), (0x93D8, "\u{8C5A}"), (0x93D9, "\u{9041}"),
    (0x93DA, "\u{9813}"), (0x93DB, "\u{5451}"), (0x93DC, "\u{66C7}"), (0x93DD, "\u{920D}"),
    (0x93DE, "\u{5948}"), (0x93DF, "\u{90A3}"), (0x93E0, "\u{5185}"), (0x93E1, "\u{4E4D}"),
    (0x93E2, "\u{51EA}"), (0x93E3, "\u{8599}"), (0x93E4, "\u{8B0E}"), (0x93E5, "\u{7058}"),
    (0x93E6, "\u{637A}"), (0x93E7, "\u{934B}"), (0x93E8, "\u{6962}"), (0x93E9, "\u{99B4}"),
    (0x93EA, "\u{7E04}"), (0x93EB, "\u{7577}"), (0x93EC, "\u{5357}"), (0x93ED, "\u{6960}"),
    (0x93EE, "\u{8EDF}"), (0x93EF, "\u{96E3}"), (0x93F0, "\u{6C5D}"), (0x93F1, "\u{4E8C}"),
    (0x93F2, "\u{5C3C}"), (0x93F3, "\u{5F10}"), (0x93F4, "\u{8FE9}"), (0x93F5, "\u{5302}"),
    (0x93F6, "\u{8CD1}"), (0x93F7, "\u{8089}"), (0x93F8, "\u{8679}"), (0x93F9, "\u{5EFF}"),
    (0x93FA, "\u{65E5}"), (0x93FB, "\u{4E73}"), (0x93FC, "\u{5165}"), (0x9440, "\u{5982}"),
    (0x9441, "\u{5C3F}"), (0x9442, "\u{97EE}"), (0x9443, "\u{4EFB}"), (0x9444, "\u{598A}"),
    (0x9445, "\u{5FCD}"), (0x9446, "\u{8A8D}"), (0x9447, "\u{6FE1}"), (0x9448, "\u{79B0}"),
    (0x9449, "\u{7962}"), (0x944A, "\u{5BE7}"), (0x944B, "\u{8471}"), (0x944C, "\u{732B}"),
    (0x944D, "\u{71B1}"), (0x944E, "\u{5E74}"), (0x944F, "\u{5FF5}"), (0x9450, "\u{637B}"),
    (0x9451, "\u{649A}"), (0x9452, "\u{71C3}"), (0x9453, "\u{7C98}"), (0x9454, "\u{4E43}"),
    (0x9455, "\u{5EFC}"), (0x9456, "\u{4E4B}"), (0x9457, "\u{57DC}"), (0x9458, "\u{56A2}"),
    (0x9459, "\u{60A9}"), (0x945A, "\u{6FC3}"), (0x945B, "\u{7D0D}"), (0x945C, "\u{80FD}"),
    (0x945D, "\u{8133}"), (0x945E, "\u{81BF}"), (0x945F, "\u{8FB2}"), (0x9460, "\u{8997}"),
    (0x9461, "\u{86A4}"), (0x9462, "\u{5DF4}"), (0x9463, "\u{628A}"), (0x9464, "\u{64AD}"),
    (0x9465, "\u{8987}"), (0x9466, "\u{6777}"), (0x9467, "\u{6CE2}"), (0x9468, "\u{6D3E}"),
    (0x9469, "\u{7436}"), (0x946A, "\u{7834}"), (0x946B, "\u{5A46}"), (0x946C, "\u{7F75}"),
    (0x946D, "\u{82AD}"), (0x946E, "\u{99AC}"), (0x946F, "\u{4FF3}"), (0x9470, "\u{5EC3}"),
    (0x9471, "\u{62DD}"), (0x9472, "\u{6392}"), (0x9473, "\u{6557}"), (0x9474, "\u{676F}"),
    (0x9475, "\u{76C3}"), (0x9476, "\u{724C}"), (0x9477, "\u{80CC}"), (0x9478, "\u{80BA}"),
    (0x9479, "\u{8F29}"), (0x947A, "\u{914D}"), (0x947B, "\u{500D}"), (0x947C, "\u{57F9}"),
    (0x947D, "\u{5A92}"), (0x947E, "\u{6885}"), (0x9480, "\u{6973}"), (0x9481, "\u{7164}"),
    (0x9482, "\u{72FD}"), (0x9483, "\u{8CB7}"), (0x9484, "\u{58F2}"), (0x9485, "\u{8CE0}"),
    (0x9486, "\u{966A}"), (0x9487, "\u{9019}"), (0x9488, "\u{877F}"), (0x9489, "\u{79E4}"),
    (0x948A, "\u{77E7}"), (0x948B, "\u{8429}"), (0x948C, "\u{4F2F}"), (0x948D, "\u{5265}"),
    (0x948E, "\u{535A}"), (0x948F, "\u{62CD}"), (0x9490, "\u{67CF}"), (0x9491, "\u{6CCA}"),
    (0x9492, "\u{767D}"), (0x9493, "\u{7B94}"), (0x9494, "\u{7C95}"), (0x9495, "\u{8236}"),
    (0x9496, "\u{8584}"), (0x9497, "\u{8FEB}"), (0x9498, "\u{66DD}"), (0x9499, "\u{6F20}"),
    (0x949A, "\u{7206}"), (0x949B, "\u{7E1B}"), (0x949C, "\u{83AB}"), (0x949D, "\u{99C1}"),
    (0x949E, "\u{9EA6}"), (0x949F, "\u{51FD}"), (0x94A0, "\u{7BB1}"), (0x94A1, "\u{7872}"),
    (0x94A2, "\u{7BB8}"), (0x94A3, "\u{8087}"), (0x94A4, "\u{7B48}"), (0x94A5, "\u{6AE8}"),
    (0x94A6, "\u{5E61}"), (0x94A7, "\u{808C}"), (0x94A8, "\u{7551}"), (0x94A9, "\u{7560}"),
    (0x94AA, "\u{516B}"), (0x94AB, "\u{9262}"), (0x94AC, "\u{6E8C}"), (0x94AD, "\u{767A}"),
    (0x94AE, "\u{9197}"), (0x94AF, "\u{9AEA}"), (0x94B0, "\u{4F10}"), (0x94B1, "\u{7F70}"),
    (0x94B2, "\u{629C}"), (0x94B3, "\u{7B4F}"), (0x94B4, "\u{95A5}"), (0x94B5, "\u{9CE9}"),
    (0x94B6, "\u{567A}"), (0x94B7, "\u{5859}"), (0x94B8, "\u{86E4}"), (0x94B9, "\u{96BC}"),
    (0x94BA, "\u{4F34}"), (0x94BB, "\u{5224}"), (0x94BC, "\u{534A}"), (0x94BD, "\u{53CD}"),
    (0x94BE, "\u{53DB}"), (0x94BF, "\u{5E06}"), (0x94C0, "\u{642C}"), (0x94C1, "\u{6591}"),
    (0x94C2, "\u{677F}"), (0x94C3, "\u{6C3E}"), (0x94C4, "\u{6C4E}"), (0x94C5, "\u{7248}"),
    (0x94C6, "\u{72AF}"), (0x94C7, "\u{73ED}"), (0x94C8, "\u{7554}"), (0x94C9, "\u{7E41}"),
    (0x94CA, "\u{822C}"), (0x94CB, "\u{85E9}"), (0x94CC, "\u{8CA9}"), (0x94CD, "\u{7BC4}"),
    (0x94CE, "\u{91C6}"), (0x94CF, "\u{7169}"), (0x94D0, "\u{9812}"), (0x94D1, "\u{98EF}"),
    (0x94D2, "\u{633D}"), (0x94D3, "\u{6669}"), (0x94D4, "\u{756A}"), (0x94D5, "\u{76E4}"),
    (0x94D6, "\u{78D0}"), (0x94D7, "\u{8543}"), (0x94D8, "\u{86EE}"), (0x94D9, "\u{532A}"),
    (0x94DA, "\u{5351}"), (0x94DB, "\u{5426}"), (0x94DC, "\u{5983}"), (0x94DD, "\u{5E87}"),
    (0x94DE, "\u{5F7C}"), (0x94DF, "\u{60B2}"), (0x94E0, "\u{6249}"), (0x94E1, "\u{6279}"),
    (0x94E2, "\u{62AB}"), (0x94E3, "\u{6590}"), (0x94E4, "\u{6BD4}"), (0x94E5, "\u{6CCC}"),
    (0x94E6, "\u{75B2}"), (0x94E7, "\u{76AE}"), (0x94E8, "\u{7891}"), (0x94E9, "\u{79D8}"),
    (0x94EA, "\u{7DCB}"), (0x94EB, "\u{7F77}"), (0x94EC, "\u{80A5}"), (0x94ED, "\u{88AB}"),
    (0x94EE, "\u{8AB9}"), (0x94EF, "\u{8CBB}"), (0x94F0, "\u{907F}"), (0x94F1, "\u{975E}"),
    (0x94F2, "\u{98DB}"), (0x94F3, "\u{6A0B}"), (0x94F4, "\u{7C38}"), (0x94F5, "\u{5099}"),
    (0x94F6, "\u{5C3E}"), (0x94F7, "\u{5FAE}"), (0x94F8, "\u{6787}"), (0x94F9, "\u{6BD8}"),
    (0x94FA, "\u{7435}"), (0x94FB, "\u{7709}"), (0x94FC, "\u{7F8E}"), (0x9540, "\u{9F3B}"),
    (0x9541, "\u{67CA}"), (0x9542, "\u{7A17}"), (0x9543, "\u{5339}"), (0x9544, "\u{758B}"),
    (0x9545, "\u{9AED}"), (0x9546, "\u{5F66}"), (0x9547, "\u{819D}"), (0x9548, "\u{83F1}"),
    (0x9549, "\u{8098}"), (0x954A, "\u{5F3C}"), (0x954B, "\u{5FC5}"), (0x954C, "\u{7562}"),
    (0x954D, "\u{7B46}"), (0x954E, "\u{903C}"), (0x954F, "\u{6867}"), (0x9550, "\u{59EB}"),
    (0x9551, "\u{5A9B}"), (0x9552, "\u{7D10}"), (0x9553, "\u{767E}"), (0x9554, "\u{8B2C}"),
    (0x9555, "\u{4FF5}"), (0x9556, "\u{5F6A}"), (0x9557, "\u{6A19}"), (0x9558, "\u{6C37}"),
    (0x9559, "\u{6F02}"), (0x955A, "\u{74E2}"), (0x955B, "\u{7968}"), (0x955C, "\u{8868}"),
    (0x955D, "\u{8A55}"), (0x955E, "\u{8C79}"), (0x955F, "\u{5EDF}"), (0x9560, "\u{63CF}"),
    (0x9561, "\u{75C5}"), (0x9562, "\u{79D2}"), (0x9563, "\u{82D7}"), (0x9564, "\u{9328}"),
    (0x9565, "\u{92F2}"), (0x9566, "\u{849C}"), (0x9567, "\u{86ED}"), (0x9568, "\u{9C2D}"),
    (0x9569, "\u{54C1}"), (0x956A, "\u{5F6C}"), (0x956B, "\u{658C}"), (0x956C, "\u{6D5C}"),
    (0x956D, "\u{7015}"), (0x956E, "\u{8CA7}"), (0x956F, "\u{8CD3}"), (0x9570, "\u{983B}"),
    (0x9571, "\u{654F}"), (0x9572, "\u{74F6}"), (0x9573, "\u{4E0D}"), (0x9574, "\u{4ED8}"),
    (0x9575, "\u{57E0}"), (0x9576, "\u{592B}"), (0x9577, "\u{5A66}"), (0x9578, "\u{5BCC}"),
    (0x9579, "\u{51A8}"), (0x957A, "\u{5E03}"), (0x957B, "\u{5E9C}"), (0x957C, "\u{6016}"),
    (0x957D, "\u{6276}"), (0x957E, "\u{6577}"), (0x9580, "\u{65A7}"), (0x9581, "\u{666E}"),
    (0x9582, "\u{6D6E}"), (0x9583, "\u{7236}"), (0x9584, "\u{7B26}"), (0x9585, "\u{8150}"),
    (0x9586, "\u{819A}"), (0x9587, "\u{8299}"), (0x9588, "\u{8B5C}"), (0x9589, "\u{8CA0}"),
    (0x958A, "\u{8CE6}"), (0x958B, "\u{8D74}"), (0x958C, "\u{961C}"), (0x958D, "\u{9644}"),
    (0x958E, "\u{4FAE}"), (0x958F, "\u{64AB}"), (0x9590, "\u{6B66}"), (0x9591, "\u{821E}"),
    (0x9592, "\u{8461}"), (0x9593, "\u{856A}"), (0x9594, "\u{90E8}"), (0x9595, "\u{5C01}"),
    (0x9596, "\u{6953}"), (0x9597, "\u{98A8}"), (0x9598, "\u{847A}"), (0x9599, "\u{8557}"),
    (0x959A, "\u{4F0F}"), (0x959B, "\u{526F}"), (0x959C, "\u{5FA9}"), (0x959D, "\u{5E45}"),
    (0x959E, "\u{670D}"), (0x959F, "\u{798F}"), (0x95A0, "\u{8179}"), (0x95A1, "\u{8907}"),
    (0x95A2, "\u{8986}"), (0x95A3, "\u{6DF5}"), (0x95A4, "\u{5F17}"), (0x95A5, "\u{6255}"),
    (0x95A6, "\u{6CB8}"), (0x95A7, "\u{4ECF}"), (0x95A8, "\u{7269}"), (0x95A9, "\u{9B92}"),
    (0x95AA, "\u{5206}"), (0x95AB, "\u{543B}"), (0x95AC, "\u{5674}"), (0x95AD, "\u{58B3}"),
    (0x95AE, "\u{61A4}"), (0x95AF, "\u{626E}"), (0x95B0, "\u{711A}"), (0x95B1, "\u{596E}"),
    (0x95B2, "\u{7C89}"), (0x95B3, "\u{7CDE}"), (0x95B4, "\u{7D1B}"), (0x95B5, "\u{96F0}"),
    (0x95B6, "\u{6587}"), (0x95B7, "\u{805E}"), (0x95B8, "\u{4E19}"), (0x95B9, "\u{4F75}"),
    (0x95BA, "\u{5175}"), (0x95BB, "\u{5840}"), (0x95BC, "\u{5E63}"), (0x95BD, "\u{5E73}"),
    (0x95BE, "\u{5F0A}"), (0x95BF, "\u{67C4}"), (0x95C0, "\u{4E26}"), (0x95C1, "\u{853D}"),
    (0x95C2, "\u{9589}"), (0x95C3, "\u{965B}"), (0x95C4, "\u{7C73}"), (0x95C5, "\u{9801}"),
    (0x95C6, "\u{50FB}"), (0x95C7, "\u{58C1}"), (0x95C8, "\u{7656}"), (0x95C9, "\u{78A7}"),
    (0x95CA, "\u{5225}"), (0x95CB, "\u{77A5}"), (0x95CC, "\u{8511}"), (0x95CD, "\u{7B86}"),
    (0x95CE, "\u{504F}"), (0x95CF, "\u{5909}"), (0x95D0, "\u{7247}"), (0x95D1, "\u{7BC7}"),
    (0x95D2, "\u{7DE8}"), (0x95D3, "\u{8FBA}"), (0x95D4, "\u{8FD4}"), (0x95D5, "\u{904D}"),
    (0x95D6, "\u{4FBF}"), (0x95D7, "\u{52C9}"), (0x95D8, "\u{5A29}"), (0x95D9, "\u{5F01}"),
    (0x95DA, "\u{97AD}"), (0x95DB, "\u{4FDD}"), (0x95DC, "\u{8217}"), (0x95DD, "\u{92EA}"),
    (0x95DE, "\u{5703}"), (0x95DF, "\u{6355}"), (0x95E0, "\u{6B69}"), (0x95E1, "\u{752B}"),
    (0x95E2, "\u{88DC}"), (0x95E3, "\u{8F14}"), (0x95E4, "\u{7A42}"), (0x95E5, "\u{52DF}"),
    (0x95E6, "\u{5893}"), (0x95E7, "\u{6155}"), (0x95E8, "\u{620A}"), (0x95E9, "\u{66AE}"),
    (0x95EA, "\u{6BCD}"), (0x95EB, "\u{7C3F}"), (0x95EC, "\u{83E9}"), (0x95ED, "\u{5023}"),
    (0x95EE, "\u{4FF8}"), (0x95EF, "\u{5305}"), (0x95F0, "\u{5446}"), (0x95F1, "\u{5831}"),
    (0x95F2, "\u{5949}"), (0x95F3, "\u{5B9D}"), (0x95F4, "\u{5CF0}"), (0x95F5, "\u{5CEF}"),
    (0x95F6, "\u{5D29}"), (0x95F7, "\u{5E96}"), (0x95F8, "\u{62B1}"), (0x95F9, "\u{6367}"),
    (0x95FA, "\u{653E}"), (0x95FB, "\u{65B9}"), (0x95FC, "\u{670B}"), (0x9640, "\u{6CD5}"),
    (0x9641, "\u{6CE1}"), (0x9642, "\u{70F9}"), (0x9643, "\u{7832}"), (0x9644, "\u{7E2B}"),
    (0x9645, "\u{80DE}"), (0x9646, "\u{82B3}"), (0x9647, "\u{840C}"), (0x9648, "\u{84EC}"),
    (0x9649, "\u{8702}"), (0x964A, "\u{8912}"), (0x964B, "\u{8A2A}"), (0x964C, "\u{8C4A}"),
    (0x964D, "\u{90A6}"), (0x964E, "\u{92D2}"), (0x964F, "\u{98FD}"), (0x9650, "\u{9CF3}"),
    (0x9651, "\u{9D6C}"), (0x9652, "\u{4E4F}"), (0x9653, "\u{4EA1}"), (0x9654, "\u{508D}"),
    (0x9655, "\u{5256}"), (0x9656, "\u{574A}"), (0x9657, "\u{59A8}"), (0x9658, "\u{5E3D}"),
    (0x9659, "\u{5FD8}"), (0x965A, "\u{5FD9}"), (0x965B, "\u{623F}"), (0x965C, "\u{66B4}"),
    (0x965D, "\u{671B}"), (0x965E, "\u{67D0}"), (0x965F, "\u{68D2}"), (0x9660, "\u{5192}"),
    (0x9661, "\u{7D21}"), (0x9662, "\u{80AA}"), (0x9663, "\u{81A8}"), (0x9664, "\u{8B00}"),
    (0x9665, "\u{8C8C}"), (0x9666, "\u{8CBF}"), (0x9667, "\u{927E}"), (0x9668, "\u{9632}"),
    (0x9669, "\u{5420}"), (0x966A, "\u{982C}"), (0x966B, "\u{5317}"), (0x966C, "\u{50D5}"),
    (0x966D, "\u{535C}"), (0x966E, "\u{58A8}"), (0x966F, "\u{64B2}"), (0x9670, "\u{6734}"),
    (0x9671, "\u{7267}"), (0x9672, "\u{7766}"), (0x9673, "\u{7A46}"), (0x9674, "\u{91E6}"),
    (0x9675, "\u{52C3}"), (0x9676, "\u{6CA1}"), (0x9677, "\u{6B86}"), (0x9678, "\u{5800}"),
    (0x9679, "\u{5E4C}"), (0x967A, "\u{5954}"), (0x967B, "\u{672C}"), (0x967C, "\u{7FFB}"),
    (0x967D, "\u{51E1}"), (0x967E, "\u{76C6}"), (0x9680, "\u{6469}"), (0x9681, "\u{78E8}"),
    (0x9682, "\u{9B54}"), (0x9683, "\u{9EBB}"), (0x9684, "\u{57CB}"), (0x9685, "\u{59B9}"),
    (0x9686, "\u{6627}"), (0x9687, "\u{679A}"), (0x9688, "\u{6BCE}"), (0x9689, "\u{54E9}"),
    (0x968A, "\u{69D9}"), (0x968B, "\u{5E55}"), (0x968C, "\u{819C}"), (0x968D, "\u{6795}"),
    (0x968E, "\u{9BAA}"), (0x968F, "\u{67FE}"), (0x9690, "\u{9C52}"), (0x9691, "\u{685D}"),
    (0x9692, "\u{4EA6}"), (0x9693, "\u{4FE3}"), (0x9694, "\u{53C8}"), (0x9695, "\u{62B9}"),
    (0x9696, "\u{672B}"), (0x9697, "\u{6CAB}"), (0x9698, "\u{8FC4}"), (0x9699, "\u{4FAD}"),
    (0x969A, "\u{7E6D}"), (0x969B, "\u{9EBF}"), (0x969C, "\u{4E07}"), (0x969D, "\u{6162}"),
    (0x969E, "\u{6E80}"), (0x969F, "\u{6F2B}"), (0x96A0, "\u{8513}"), (0x96A1, "\u{5473}"),
    (0x96A2, "\u{672A}"), (0x96A3, "\u{9B45}"), (0x96A4, "\u{5DF3}"), (0x96A5, "\u{7B95}"),
    (0x96A6, "\u{5CAC}"), (0x96A7, "\u{5BC6}"), (0x96A8, "\u{871C}"), (0x96A9, "\u{6E4A}"),
    (0x96AA, "\u{84D1}"), (0x96AB, "\u{7A14}"), (0x96AC, "\u{8108}"), (0x96AD, "\u{5999}"),
    (0x96AE, "\u{7C8D}"), (0x96AF, "\u{6C11}"), (0x96B0, "\u{7720}"), (0x96B1, "\u{52D9}"),
    (0x96B2, "\u{5922}"), (0x96B3, "\u{7121}"), (0x96B4, "\u{725F}"), (0x96B5, "\u{77DB}"),
    (0x96B6, "\u{9727}"), (0x96B7, "\u{9D61}"), (0x96B8, "\u{690B}"), (0x96B9, "\u{5A7F}"),
    (0x96BA, "\u{5A18}"), (0x96BB, "\u{51A5}"), (0x96BC, "\u{540D}"), (0x96BD, "\u{547D}"),
    (0x96BE, "\u{660E}"), (0x96BF, "\u{76DF}"), (0x96C0, "\u{8FF7}"), (0x96C1, "\u{9298}"),
    (0x96C2, "\u{9CF4}"), (0x96C3, "\u{59EA}"), (0x96C4, "\u{725D}"), (0x96C5, "\u{6EC5}"),
    (0x96C6, "\u{514D}"), (0x96C7, "\u{68C9}"), (0x96C8, "\u{7DBF}"), (0x96C9, "\u{7DEC}"),
    (0x96CA, "\u{9762}"), (0x96CB, "\u{9EBA}"), (0x96CC, "\u{6478}"), (0x96CD, "\u{6A21}"),
    (0x96CE, "\u{8302}"), (0x96CF, "\u{5984}"), (0x96D0, "\u{5B5F}"), (0x96D1, "\u{6BDB}"),
    (0x96D2, "\u{731B}"), (0x96D3, "\u{76F2}"), (0x96D4, "\u{7DB2}"), (0x96D5, "\u{8017}"),
    (0x96D6, "\u{8499}"), (0x96D7, "\u{5132}"), (0x96D8, "\u{6728}"), (0x96D9, "\u{9ED9}"),
    (0x96DA, "\u{76EE}"), (0x96DB, "\u{6762}"), (0x96DC, "\u{52FF}"), (0x96DD, "\u{9905}"),
    (0x96DE, "\u{5C24}"), (0x96DF, "\u{623B}"), (0x96E0, "\u{7C7E}"), (0x96E1, "\u{8CB0}"),
    (0x96E2, "\u{554F}"), (0x96E3, "\u{60B6}"), (0x96E4, "\u{7D0B}"), (0x96E5, "\u{9580}"),
    (0x96E6, "\u{5301}"), (0x96E7, "\u{4E5F}"), (0x96E8, "\u{51B6}"), (0x96E9, "\u{591C}"),
    (0x96EA, "\u{723A}"), (0x96EB, "\u{8036}"), (0x96EC, "\u{91CE}"), (0x96ED, "\u{5F25}"),
    (0x96EE, "\u{77E2}"), (0x96EF, "\u{5384}"), (0x96F0, "\u{5F79}"), (0x96F1, "\u{7D04}"),
    (0x96F2, "\u{85AC}"), (0x96F3, "\u{8A33}"), (0x96F4, "\u{8E8D}"), (0x96F5, "\u{9756}"),
    (0x96F6, "\u{67F3}"), (0x96F7, "\u{85AE}"), (0x96F8, "\u{9453}"), (0x96F9, "\u{6109}"),
    (0x96FA, "\u{6108}"), (0x96FB, "\u{6CB9}"), (0x96FC, "\u{7652}"), (0x9740, "\u{8AED}"),
    (0x9741, "\u{8F38}"), (0x9742, "\u{552F}"), (0x9743, "\u{4F51}"), (0x9744, "\u{512A}"),
    (0x9745, "\u{52C7}"), (0x9746, "\u{53CB}"), (0x9747, "\u{5BA5}"), (0x9748, "\u{5E7D}"),
    (0x9749, "\u{60A0}"), (0x974A, "\u{6182}"), (0x974B, "\u{63D6}"), (0x974C, "\u{6709}"),
    (0x974D, "\u{67DA}"), (0x974E, "\u{6E67}"), (0x974F, "\u{6D8C}"), (0x9750, "\u{7336}"),
    (0x9751, "\u{7337}"), (0x9752, "\u{7531}"), (0x9753, "\u{7950}"), (0x9754, "\u{88D5}"),
    (0x9755, "\u{8A98}"), (0x9756, "\u{904A}"), (0x9757, "\u{9091}"), (0x9758, "\u{90F5}"),
    (0x9759, "\u{96C4}"), (0x975A, "\u{878D}"), (0x975B, "\u{5915}"), (0x975C, "\u{4E88}"),
    (0x975D, "\u{4F59}"), (0x975E, "\u{4E0E}"), (0x975F, "\u{8A89}"), (0x9760, "\u{8F3F}"),
    (0x9761, "\u{9810}"), (0x9762, "\u{50AD}"), (0x9763, "\u{5E7C}"), (0x9764, "\u{5996}"),
    (0x9765, "\u{5BB9}"), (0x9766, "\u{5EB8}"), (0x9767, "\u{63DA}"), (0x9768, "\u{63FA}"),
    (0x9769, "\u{64C1}"), (0x976A, "\u{66DC}"), (0x976B, "\u{694A}"), (0x976C, "\u{69D8}"),
    (0x976D, "\u{6D0B}"), (0x976E, "\u{6EB6}"), (0x976F, "\u{7194}"), (0x9770, "\u{7528}"),
    (0x9771, "\u{7AAF}"), (0x9772, "\u{7F8A}"), (0x9773, "\u{8000}"), (0x9774, "\u{8449}"),
    (0x9775, "\u{84C9}"), (0x9776, "\u{8981}"), (0x9777, "\u{8B21}"), (0x9778, "\u{8E0A}"),
    (0x9779, "\u{9065}"), (0x977A, "\u{967D}"), (0x977B, "\u{990A}"), (0x977C, "\u{617E}"),
    (0x977D, "\u{6291}"), (0x977E, "\u{6B32}"), (0x9780, "\u{6C83}"), (0x9781, "\u{6D74}"),
    (0x9782, "\u{7FCC}"), (0x9783, "\u{7FFC}"), (0x9784, "\u{6DC0}"), (0x9785, "\u{7F85}"),
    (0x9786, "\u{87BA}"), (0x9787, "\u{88F8}"), (0x9788, "\u{6765}"), (0x9789, "\u{83B1}"),
    (0x978A, "\u{983C}"), (0x978B, "\u{96F7}"), (0x978C, "\u{6D1B}"), (0x978D, "\u{7D61}"),
    (0x978E, "\u{843D}"), (0x978F, "\u{916A}"), (0x9790, "\u{4E71}"), (0x9791, "\u{5375}"),
    (0x9792, "\u{5D50}"), (0x9793, "\u{6B04}"), (0x9794, "\u{6FEB}"), (0x9795, "\u{85CD}"),
    (0x9796, "\u{862D}"), (0x9797, "\u{89A7}"), (0x9798, "\u{5229}"), (0x9799, "\u{540F}"),
    (0x979A, "\u{5C65}"), (0x979B, "\u{674E}"), (0x979C, "\u{68A8}"), (0x979D, "\u{7406}"),
    (0x979E, "\u{7483}"), (0x979F, "\u{75E2}"), (0x97A0, "\u{88CF}"), (0x97A1, "\u{88E1}"),
    (0x97A2, "\u{91CC}"), (0x97A3, "\u{96E2}"), (0x97A4, "\u{9678}"), (0x97A5, "\u{5F8B}"),
    (0x97A6, "\u{7387}"), (0x97A7, "\u{7ACB}"), (0x97A8, "\u{844E}"), (0x97A9, "\u{63A0}"),
    (0x97AA, "\u{7565}"), (0x97AB, "\u{5289}"), (0x97AC, "\u{6D41}"), (0x97AD, "\u{6E9C}"),
    (0x97AE, "\u{7409}"), (0x97AF, "\u{7559}"), (0x97B0, "\u{786B}"), (0x97B1, "\u{7C92}"),
    (0x97B2, "\u{9686}"), (0x97B3, "\u{7ADC}"), (0x97B4, "\u{9F8D}"), (0x97B5, "\u{4FB6}"),
    (0x97B6, "\u{616E}"), (0x97B7, "\u{65C5}"), (0x97B8, "\u{865C}"), (0x97B9, "\u{4E86}"),
    (0x97BA, "\u{4EAE}"), (0x97BB, "\u{50DA}"), (0x97BC, "\u{4E21}"), (0x97BD, "\u{51CC}"),
    (0x97BE, "\u{5BEE}"), (0x97BF, "\u{6599}"), (0x97C0, "\u{6881}"), (0x97C1, "\u{6DBC}"),
    (0x97C2, "\u{731F}"), (0x97C3, "\u{7642}"), (0x97C4, "\u{77AD}"), (0x97C5, "\u{7A1C}"),
    (0x97C6, "\u{7CE7}"), (0x97C7, "\u{826F}"), (0x97C8, "\u{8AD2}"), (0x97C9, "\u{907C}"),
    (0x97CA, "\u{91CF}"), (0x97CB, "\u{9675}"), (0x97CC, "\u{9818}"), (0x97CD, "\u{529B}"),
    (0x97CE, "\u{7DD1}"), (0x97CF, "\u{502B}"), (0x97D0, "\u{5398}"), (0x97D1, "\u{6797}"),
    (0x97D2, "\u{6DCB}"), (0x97D3, "\u{71D0}"), (0x97D4, "\u{7433}"), (0x97D5, "\u{81E8}"),
    (0x97D6, "\u{8F2A}"), (0x97D7, "\u{96A3}"), (0x97D8, "\u{9C57}"), (0x97D9, "\u{9E9F}"),
    (0x97DA, "\u{7460}"), (0x97DB, "\u{5841}"), (0x97DC, "\u{6D99}"), (0x97DD, "\u{7D2F}"),
    (0x97DE, "\u{985E}"), (0x97DF, "\u{4EE4}"), (0x97E0, "\u{4F36}"), (0x97E1, "\u{4F8B}"),
    (0x97E2, "\u{51B7}"), (0x97E3, "\u{52B1}"), (0x97E4, "\u{5DBA}"), (0x97E5, "\u{601C}"),
    (0x97E6, "\u{73B2}"), (0x97E7, "\u{793C}"), (0x97E8, "\u{82D3}"), (0x97E9, "\u{9234}"),
    (0x97EA, "\u{96B7}"), (0x97EB, "\u{96F6}"), (0x97EC, "\u{970A}"), (0x97ED, "\u{9E97}"),
    (0x97EE, "\u{9F62}"), (0x97EF, "\u{66A6}"), (0x97F0, "\u{6B74}"), (0x97F1, "\u{5217}"),
    (0x97F2, "\u{52A3}"), (0x97F3, "\u{70C8}"), (0x97F4, "\u{88C2}"), (0x97F5, "\u{5EC9}"),
    (0x97F6, "\u{604B}"), (0x97F7, "\u{6190}"), (0x97F8, "\u{6F23}"), (0x97F9, "\u{7149}"),
    (0x97FA, "\u{7C3E}"), (0x97FB, "\u{7DF4}"), (0x97FC, "\u{806F}"), (0x9840, "\u{84EE}"),
    (0x9841, "\u{9023}"), (0x9842, "\u{932C}"), (0x9843, "\u{5442}"), (0x9844, "\u{9B6F}"),
    (0x9845, "\u{6AD3}"), (0x9846, "\u{7089}"), (0x9847, "\u{8CC2}"), (0x9848, "\u{8DEF}"),
    (0x9849, "\u{9732}"), (0x984A, "\u{52B4}"), (0x984B, "\u{5A41}"), (0x984C, "\u{5ECA}"),
    (0x984D, "\u{5F04}"), (0x984E, "\u{6717}"), (0x984F, "\u{697C}"), (0x9850, "\u{6994}"),
    (0x9851, "\u{6D6A}"), (0x9852, "\u{6F0F}"), (0x9853, "\u{7262}"), (0x9854, "\u{72FC}"),
    (0x9855, "\u{7BED}"), (0x9856, "\u{8001}"), (0x9857, "\u{807E}"), (0x9858, "\u{874B}"),
    (0x9859, "\u{90CE}"), (0x985A, "\u{516D}"), (0x985B, "\u{9E93}"), (0x985C, "\u{7984}"),
    (0x985D, "\u{808B}"), (0x985E, "\u{9332}"), (0x985F, "\u{8AD6}"), (0x9860, "\u{502D}"),
    (0x9861, "\u{548C}"), (0x9862, "\u{8A71}"), (0x9863, "\u{6B6A}"), (0x9864, "\u{8CC4}"),
    (0x9865, "\u{8107}"), (0x9866, "\u{60D1}"), (0x9867, "\u{67A0}"), (0x9868, "\u{9DF2}"),
    (0x9869, "\u{4E99}"), (0x986A, "\u{4E98}"), (0x986B, "\u{9C10}"), (0x986C, "\u{8A6B}"),
    (0x986D, "\u{85C1}"), (0x986E, "\u{8568}"), (0x986F, "\u{6900}"), (0x9870, "\u{6E7E}"),
    (0x9871, "\u{7897}"), (0x9872, "\u{8155}"), (0x989F, "\u{5F0C}"), (0x98A0, "\u{4E10}"),
    (0x98A1, "\u{4E15}"), (0x98A2, "\u{4E2A}"), (0x98A3, "\u{4E31}"), (0x98A4, "\u{4E36}"),
    (0x98A5, "\u{4E3C}"), (0x98A6, "\u{4E3F}"), (0x98A7, "\u{4E42}"), (0x98A8, "\u{4E56}"),
    (0x98A9, "\u{4E58}"), (0x98AA, "\u{4E82}"), (0x98AB, "\u{4E85}"), (0x98AC, "\u{8C6B}"),
    (0x98AD, "\u{4E8A}"), (0x98AE, "\u{8212}"), (0x98AF, "\u{5F0D}"), (0x98B0, "\u{4E8E}"),
    (0x98B1, "\u{4E9E}"), (0x98B2, "\u{4E9F}"), (0x98B3, "\u{4EA0}"), (0x98B4, "\u{4EA2}"),
    (0x98B5, "\u{4EB0}"), (0x98B6, "\u{4EB3}"), (0x98B7, "\u{4EB6}"), (0x98B8, "\u{4ECE}"),
    (0x98B9, "\u{4ECD}"), (0x98BA, "\u{4EC4}"), (0x98BB, "\u{4EC6}"), (0x98BC, "\u{4EC2}"),
    (0x98BD, "\u{4ED7}"), (0x98BE, "\u{4EDE}"), (0x98BF, "\u{4EED}"), (0x98C0, "\u{4EDF}"),
    (0x98C1, "\u{4EF7}"), (0x98C2, "\u{4F09}"), (0x98C3, "\u{4F5A}"), (0x98C4, "\u{4F30}"),
    (0x98C5, "\u{4F5B}"), (0x98C6, "\u{4F5D}"), (0x98C7, "\u{4F57}"), (0x98C8, "\u{4F47}"),
    (0x98C9, "\u{4F76}"), (0x98CA, "\u{4F88}"), (0x98CB, "\u{4F8F}"), (0x98CC, "\u{4F98}"),
    (0x98CD, "\u{4F7B}"), (0x98CE, "\u{4F69}"), (0x98CF, "\u{4F70}"), (0x98D0, "\u{4F91}"),
    (0x98D1, "\u{4F6F}"), (0x98D2, "\u{4F86}"), (0x98D3, "\u{4F96}"), (0x98D4, "\u{5118}"),
    (0x98D5, "\u{4FD4}"), (0x98D6, "\u{4FDF}"), (0x98D7, "\u{4FCE}"), (0x98D8, "\u{4FD8}"),
    (0x98D9, "\u{4FDB}"), (0x98DA, "\u{4FD1}"), (0x98DB, "\u{4FDA}"), (0x98DC, "\u{4FD0}"),
    (0x98DD, "\u{4FE4}"), (0x98DE, "\u{4FE5}"), (0x98DF, "\u{501A}"), (0x98E0, "\u{5028}"),
    (0x98E1, "\u{5014}"), (0x98E2, "\u{502A}"), (0x98E3, "\u{5025}"), (0x98E4, "\u{5005}"),
    (0x98E5, "\u{4F1C}"), (0x98E6, "\u{4FF6}"), (0x98E7, "\u{5021}"), (0x98E8, "\u{5029}"),
    (0x98E9, "\u{502C}"), (0x98EA, "\u{4FFE}"), (0x98EB, "\u{4FEF}"), (0x98EC, "\u{5011}"),
    (0x98ED, "\u{5006}"), (0x98EE, "\u{5043}"), (0x98EF, "\u{5047}"), (0x98F0, "\u{6703}"),
    (0x98F1, "\u{5055}"), (0x98F2, "\u{5050}"), (0x98F3, "\u{5048}"), (0x98F4, "\u{505A}"),
    (0x98F5, "\u{5056}"), (0x98F6, "\u{506C}"), (0x98F7, "\u{5078}"), (0x98F8, "\u{5080}"),
    (0x98F9, "\u{509A}"), (0x98FA, "\u{5085}"), (0x98FB, "\u{50B4}"), (0x98FC, "\u{50B2}"),
    (0x9940, "\u{50C9}"), (0x9941, "\u{50CA}"), (0x9942, "\u{50B3}"), (0x9943, "\u{50C2}"),
    (0x9944, "\u{50D6}"), (0x9945, "\u{50DE}"), (0x9946, "\u{50E5}"), (0x9947, "\u{50ED}"),
    (0x9948, "\u{50E3}"), (0x9949, "\u{50EE}"), (0x994A, "\u{50F9}"), (0x994B, "\u{50F5}"),
    (0x994C, "\u{5109}"), (0x994D, "\u{5101}"), (0x994E, "\u{5102}"), (0x994F, "\u{5116}"),
    (0x9950, "\u{5115}"), (0x9951, "\u{5114}"), (0x9952, "\u{511A}"), (0x9953, "\u{5121}"),
    (0x9954, "\u{513A}"), (0x9955, "\u{5137}"), (0x9956, "\u{513C}"), (0x9957, "\u{513B}"),
    (0x9958, "\u{513F}"), (0x9959, "\u{5140}"), (0x995A, "\u{5152}"), (0x995B, "\u{514C}"),
    (0x995C, "\u{5154}"), (0x995D, "\u{5162}"), (0x995E, "\u{7AF8}"), (0x995F, "\u{5169}"),
    (0x9960, "\u{516A}"), (0x9961, "\u{516E}"), (0x9962, "\u{5180}"), (0x9963, "\u{5182}"),
    (0x9964, "\u{56D8}"), (0x9965, "\u{518C}"), (0x9966, "\u{5189}"), (0x9967, "\u{518F}"),
    (0x9968, "\u{5191}"), (0x9969, "\u{5193}"), (0x996A, "\u{5195}"), (0x996B, "\u{5196}"),
    (0x996C, "\u{51A4}"), (0x996D, "\u{51A6}"), (0x996E, "\u{51A2}"), (0x996F, "\u{51A9}"),
    (0x9970, "\u{51AA}"), (0x9971, "\u{51AB}"), (0x9972, "\u{51B3}"), (0x9973, "\u{51B1}"),
    (0x9974, "\u{51B2}"), (0x9975, "\u{51B0}"), (0x9976, "\u{51B5}"), (0x9977, "\u{51BD}"),
    (0x9978, "\u{51C5}"), (0x9979, "\u{51C9}"), (0x997A, "\u{51DB}"), (0x997B, "\u{51E0}"),
    (0x997C, "\u{8655}"), (0x997D, "\u{51E9}"), (0x997E, "\u{51ED}"), (0x9980, "\u{51F0}"),
    (0x9981, "\u{51F5}"), (0x9982, "\u{51FE}"), (0x9983, "\u{5204}"), (0x9984, "\u{520B}"),
    (0x9985, "\u{5214}"), (0x9986, "\u{520E}"), (0x9987, "\u{5227}"), (0x9988, "\u{522A}"),
    (0x9989, "\u{522E}"), (0x998A, "\u{5233}"), (0x998B, "\u{5239}"), (0x998C, "\u{524F}"),
    (0x998D, "\u{5244}"), (0x998E, "\u{524B}"), (0x998F, "\u{524C}"), (0x9990, "\u{525E}"),
    (0x9991, "\u{5254}"), (0x9992, "\u{526A}"), (0x9993, "\u{5274}"), (0x9994, "\u{5269}"),
    (0x9995, "\u{5273}"), (0x9996, "\u{527F}"), (0x9997, "\u{527D}"), (0x9998, "\u{528D}"),
    (0x9999, "\u{5294}"), (0x999A, "\u{5292}"), (0x999B, "\u{5271}"), (0x999C, "\u{5288}"),
    (0x999D, "\u{5291}"), (0x999E, "\u{8FA8}"), (0x999F, "\u{8FA7}"), (0x99A0, "\u{52AC}"),
    (0x99A1, "\u{52AD}"), (0x99A2, "\u{52BC}"), (0x99A3, "\u{52B5}"), (0x99A4, "\u{52C1}"),
    (0x99A5, "\u{52CD}"), (0x99A6, "\u{52D7}"), (0x99A7, "\u{52DE}"), (0x99A8, "\u{52E3}"),
    (0x99A9, "\u{52E6}"), (0x99AA, "\u{98ED}"), (0x99AB, "\u{52E0}"), (0x99AC, "\u{52F3}"),
    (0x99AD, "\u{52F5}"), (0x99AE, "\u{52F8}"), (0x99AF, "\u{52F9}"), (0x99B0, "\u{5306}"),
    (0x99B1, "\u{5308}"), (0x99B2, "\u{7538}"), (0x99B3, "\u{530D}"), (0x99B4, "\u{5310}"),
    (0x99B5, "\u{530F}"), (0x99B6, "\u{5315}"), (0x99B7, "\u{531A}"), (0x99B8, "\u{5323}"),
    (0x99B9, "\u{532F}"), (0x99BA, "\u{5331}"), (0x99BB, "\u{5333}"), (0x99BC, "\u{5338}"),
    (0x99BD, "\u{5340}"), (0x99BE, "\u{5346}"), (0x99BF, "\u{5345}"), (0x99C0, "\u{4E17}"),
    (0x99C1, "\u{5349}"), (0x99C2, "\u{534D}"), (0x99C3, "\u{51D6}"), (0x99C4, "\u{535E}"),
    (0x99C5, "\u{5369}"), (0x99C6, "\u{536E}"), (0x99C7, "\u{5918}"), (0x99C8, "\u{537B}"),
    (0x99C9, "\u{5377}"), (0x99CA, "\u{5382}"), (0x99CB, "\u{5396}"), (0x99CC, "\u{53A0}"),
    (0x99CD, "\u{53A6}"), (0x99CE, "\u{53A5}"), (0x99CF, "\u{53AE}"), (0x99D0, "\u{53B0}"),
    (0x99D1, "\u{53B6}"), (0x99D2, "\u{53C3}"), (0x99D3, "\u{7C12}"), (0x99D4, "\u{96D9}"),
    (0x99D5, "\u{53DF}"), (0x99D6, "\u{66FC}"), (0x99D7, "\u{71EE}"), (0x99D8, "\u{53EE}"),
    (0x99D9, "\u{53E8}"), (0x99DA, "\u{53ED}"), (0x99DB, "\u{53FA}"), (0x99DC, "\u{5401}"),
    (0x99DD, "\u{543D}"), (0x99DE, "\u{5440}"), (0x99DF, "\u{542C}"), (0x99E0, "\u{542D}"),
    (0x99E1, "\u{543C}"), (0x99E2, "\u{542E}"), (0x99E3, "\u{5436}"), (0x99E4, "\u{5429}"),
    (0x99E5, "\u{541D}"), (0x99E6, "\u{544E}"), (0x99E7, "\u{548F}"), (0x99E8, "\u{5475}"),
    (0x99E9, "\u{548E}"), (0x99EA, "\u{545F}"), (0x99EB, "\u{5471}"), (0x99EC, "\u{5477}"),
    (0x99ED, "\u{5470}"), (0x99EE, "\u{5492}"), (0x99EF, "\u{547B}"), (0x99F0, "\u{5480}"),
    (0x99F1, "\u{5476}"), (0x99F2, "\u{5484}"), (0x99F3, "\u{5490}"), (0x99F4, "\u{5486}"),
    (0x99F5, "\u{54C7}"), (0x99F6, "\u{54A2}"), (0x99F7, "\u{54B8}"), (0x99F8, "\u{54A5}"),
    (0x99F9, "\u{54AC}"), (0x99FA, "\u{54C4}"), (0x99FB, "\u{54C8}"), (0x99FC, "\u{54A8}"),
    (0x9A40, "\u{54AB}"), (0x9A41, "\u{54C2}"), (0x9A42, "\u{54A4}"), (0x9A43, "\u{54BE}"),
    (0x9A44, "\u{54BC}"), (0x9A45, "\u{54D8}"), (0x9A46, "\u{54E5}"), (0x9A47, "\u{54E6}"),
    (0x9A48, "\u{550F}"), (0x9A49, "\u{5514}"), (0x9A4A, "\u{54FD}"), (0x9A4B, "\u{54EE}"),
    (0x9A4C, "\u{54ED}"), (0x9A4D, "\u{54FA}"), (0x9A4E, "\u{54E2}"), (0x9A4F, "\u{5539}"),
    (0x9A50, "\u{5540}"), (0x9A51, "\u{5563}"), (0x9A52, "\u{554C}"), (0x9A53, "\u{552E}"),
    (0x9A54, "\u{555C}"), (0x9A55, "\u{5545}"), (0x9A56, "\u{5556}"), (0x9A57, "\u{5557}"),
    (0x9A58, "\u{5538}"), (0x9A59, "\u{5533}"), (0x9A5A, "\u{555D}"), (0x9A5B, "\u{5599}"),
    (0x9A5C, "\u{5580}"), (0x9A5D, "\u{54AF}"), (0x9A5E, "\u{558A}"), (0x9A5F, "\u{559F}"),
    (0x9A60, "\u{557B}"), (0x9A61, "\u{557E}"), (0x9A62, "\u{5598}"), (0x9A63, "\u{559E}"),
    (0x9A64, "\u{55AE}"), (0x9A65, "\u{557C}"), (0x9A66, "\u{5583}"), (0x9A67, "\u{55A9}"),
    (0x9A68, "\u{5587}"), (0x9A69, "\u{55A8}"), (0x9A6A, "\u{55DA}"), (0x9A6B, "\u{55C5}"),
    (0x9A6C, "\u{55DF}"), (0x9A6D, "\u{55C4}"), (0x9A6E, "\u{55DC}"), (0x9A6F, "\u{55E4}"),
    (0x9A70, "\u{55D4}"), (0x9A71, "\u{5614}"), (0x9A72, "\u{55F7}"), (0x9A73, "\u{5616}"),
    (0x9A74, "\u{55FE}"), (0x9A75, "\u{55FD}"), (0x9A76, "\u{561B}"), (0x9A77, "\u{55F9}"),
    (0x9A78, "\u{564E}"), (0x9A79, "\u{5650}"), (0x9A7A, "\u{71DF}"), (0x9A7B, "\u{5634}"),
    (0x9A7C, "\u{5636}"), (0x9A7D, "\u{5632}"), (0x9A7E, "\u{5638}"), (0x9A80, "\u{566B}"),
    (0x9A81, "\u{5664}"), (0x9A82, "\u{562F}"), (0x9A83, "\u{566C}"), (0x9A84, "\u{566A}"),
    (0x9A85, "\u{5686}"), (0x9A86, "\u{5680}"), (0x9A87, "\u{568A}"), (0x9A88, "\u{56A0}"),
    (0x9A89, "\u{5694}"), (0x9A8A, "\u{568F}"), (0x9A8B, "\u{56A5}"), (0x9A8C, "\u{56AE}"),
    (0x9A8D, "\u{56B6}"), (0x9A8E, "\u{56B4}"), (0x9A8F, "\u{56C2}"), (0x9A90, "\u{56BC}"),
    (0x9A91, "\u{56C1}"), (0x9A92, "\u{56C3}"), (0x9A93, "\u{56C0}"), (0x9A94, "\u{56C8}"),
    (0x9A95, "\u{56CE}"), (0x9A96, "\u{56D1}"), (0x9A97, "\u{56D3}"), (0x9A98, "\u{56D7}"),
    (0x9A99, "\u{56EE}"), (0x9A9A, "\u{56F9}"), (0x9A9B, "\u{5700}"), (0x9A9C, "\u{56FF}"),
    (0x9A9D, "\u{5704}"), (0x9A9E, "\u{5709}"), (0x9A9F, "\u{5708}"), (0x9AA0, "\u{570B}"),
    (0x9AA1, "\u{570D}"), (0x9AA2, "\u{5713}"), (0x9AA3, "\u{5718}"), (0x9AA4, "\u{5716}"),
    (0x9AA5, "\u{55C7}"), (0x9AA6, "\u{571C}"), (0x9AA7, "\u{5726}"), (0x9AA8, "\u{5737}"),
    (0x9AA9, "\u{5738}"), (0x9AAA, "\u{574E}"), (0x9AAB, "\u{573B}"), (0x9AAC, "\u{5740}"),
    (0x9AAD, "\u{574F}"), (0x9AAE, "\u{5769}"), (0x9AAF, "\u{57C0}"), (0x9AB0, "\u{5788}"),
    (0x9AB1, "\u{5761}"), (0x9AB2, "\u{577F}"), (0x9AB3, "\u{5789}"), (0x9AB4, "\u{5793}"),
    (0x9AB5, "\u{57A0}"), (0x9AB6, "\u{57B3}"), (0x9AB7, "\u{57A4}"), (0x9AB8, "\u{57AA}"),
    (0x9AB9, "\u{57B0}"), (0x9ABA, "\u{57C3}"), (0x9ABB, "\u{57C6}"), (0x9ABC, "\u{57D4}"),
    (0x9ABD, "\u{57D2}"), (0x9ABE, "\u{57D3}"), (0x9ABF, "\u{580A}"), (0x9AC0, "\u{57D6}"),
    (0x9AC1, "\u{57E3}"), (0x9AC2, "\u{580B}"), (0x9AC3, "\u{5819}"), (0x9AC4, "\u{581D}"),
    (0x9AC5, "\u{5872}"), (0x9AC6, "\u{5821}"), (0x9AC7, "\u{5862}"), (0x9AC8, "\u{584B}"),
    (0x9AC9, "\u{5870}"), (0x9ACA, "\u{6BC0}"), (0x9ACB, "\u{5852}"), (0x9ACC, "\u{583D}"),
    (0x9ACD, "\u{5879}"), (0x9ACE, "\u{5885}"), (0x9ACF, "\u{58B9}"), (0x9AD0, "\u{589F}"),
    (0x9AD1, "\u{58AB}"), (0x9AD2, "\u{58BA}"), (0x9AD3, "\u{58DE}"), (0x9AD4, "\u{58BB}"),
    (0x9AD5, "\u{58B8}"), (0x9AD6, "\u{58AE}"), (0x9AD7, "\u{58C5}"), (0x9AD8, "\u{58D3}"),
    (0x9AD9, "\u{58D1}"), (0x9ADA, "\u{58D7}"), (0x9ADB, "\u{58D9}"), (0x9ADC, "\u{58D8}"),
    (0x9ADD, "\u{58E5}"), (0x9ADE, "\u{58DC}"), (0x9ADF, "\u{58E4}"), (0x9AE0, "\u{58DF}"),
    (0x9AE1, "\u{58EF}"), (0x9AE2, "\u{58FA}"), (0x9AE3, "\u{58F9}"), (0x9AE4, "\u{58FB}"),
    (0x9AE5, "\u{58FC}"), (0x9AE6, "\u{58FD}"), (0x9AE7, "\u{5902}"), (0x9AE8, "\u{590A}"),
    (0x9AE9, "\u{5910}"), (0x9AEA, "\u{591B}"), (0x9AEB, "\u{68A6}"), (0x9AEC, "\u{5925}"),
    (0x9AED, "\u{592C}"), (0x9AEE, "\u{592D}"), (0x9AEF, "\u{5932}"), (0x9AF0, "\u{5938}"),
    (0x9AF1, "\u{593E}"), (0x9AF2, "\u{7AD2}"), (0x9AF3, "\u{5955}"), (0x9AF4, "\u{5950}"),
    (0x9AF5, "\u{594E}"), (0x9AF6, "\u{595A}"), (0x9AF7, "\u{5958}"), (0x9AF8, "\u{5962}"),
    (0x9AF9, "\u{5960}"), (0x9AFA, "\u{5967}"), (0x9AFB, "\u{596C}"), (0x9AFC, "\u{5969}"),
    (0x9B40, "\u{5978}"), (0x9B41, "\u{5981}"), (0x9B42, "\u{599D}"), (0x9B43, "\u{4F5E}"),
    (0x9B44, "\u{4FAB}"), (0x9B45, "\u{59A3}"), (0x9B46, "\u{59B2}"), (0x9B47, "\u{59C6}"),
    (0x9B48, "\u{59E8}"), (0x9B49, "\u{59DC}"), (0x9B4A, "\u{598D}"), (0x9B4B, "\u{59D9}"),
    (0x9B4C, "\u{59DA}"), (0x9B4D, "\u{5A25}"), (0x9B4E, "\u{5A1F}"), (0x9B4F, "\u{5A11}"),
    (0x9B50, "\u{5A1C}"), (0x9B51, "\u{5A09}"), (0x9B52, "\u{5A1A}"), (0x9B53, "\u{5A40}"),
    (0x9B54, "\u{5A6C}"), (0x9B55, "\u{5A49}"), (0x9B56, "\u{5A35}"), (0x9B57, "\u{5A36}"),
    (0x9B58, "\u{5A62}"), (0x9B59, "\u{5A6A}"), (0x9B5A, "\u{5A9A}"), (0x9B5B, "\u{5ABC}"),
    (0x9B5C, "\u{5ABE}"), (0x9B5D, "\u{5ACB}"), (0x9B5E, "\u{5AC2}"), (0x9B5F, "\u{5ABD}"),
    (0x9B60, "\u{5AE3}"), (0x9B61, "\u{5AD7}"), (0x9B62, "\u{5AE6}"), (0x9B63, "\u{5AE9}"),
    (0x9B64, "\u{5AD6}"), (0x9B65, "\u{5AFA}"), (0x9B66, "\u{5AFB}"), (0x9B67, "\u{5B0C}"),
    (0x9B68, "\u{5B0B}"), (0x9B69, "\u{5B16}"), (0x9B6A, "\u{5B32}"), (0x9B6B, "\u{5AD0}"),
    (0x9B6C, "\u{5B2A}"), (0x9B6D, "\u{5B36}"), (0x9B6E, "\u{5B3E}"), (0x9B6F, "\u{5B43}"),
    (0x9B70, "\u{5B45}"), (0x9B71, "\u{5B40}"), (0x9B72, "\u{5B51}"), (0x9B73, "\u{5B55}"),
    (0x9B74, "\u{5B5A}"), (0x9B75, "\u{5B5B}"), (0x9B76, "\u{5B65}"), (0x9B77, "\u{5B69}"),
    (0x9B78, "\u{5B70}"), (0x9B79, "\u{5B73}"), (0x9B7A, "\u{5B75}"), (0x9B7B, "\u{5B78}"),
    (0x9B7C, "\u{6588}"), (0x9B7D, "\u{5B7A}"), (0x9B7E, "\u{5B80}"), (0x9B80, "\u{5B83}"),
    (0x9B81, "\u{5BA6}"), (0x9B82, "\u{5BB8}"), (0x9B83, "\u{5BC3}"), (0x9B84, "\u{5BC7}"),
    (0x9B85, "\u{5BC9}"), (0x9B86, "\u{5BD4}"), (0x9B87, "\u{5BD0}"), (0x9B88, "\u{5BE4}"),
    (0x9B89, "\u{5BE6}"), (0x9B8A, "\u{5BE2}"), (0x9B8B, "\u{5BDE}"), (0x9B8C, "\u{5BE5}"),
    (0x9B8D, "\u{5BEB}"), (0x9B8E, "\u{5BF0}"), (0x9B8F, "\u{5BF6}"), (0x9B90, "\u{5BF3}"),
    (0x9B91, "\u{5C05}"), (0x9B92, "\u{5C07}"), (0x9B93, "\u{5C08}"), (0x9B94, "\u{5C0D}"),
    (0x9B95, "\u{5C13}"), (0x9B96, "\u{5C20}"), (0x9B97, "\u{5C22}"), (0x9B98, "\u{5C28}"),
    (0x9B99, "\u{5C38}"), (0x9B9A, "\u{5C39}"), (0x9B9B, "\u{5C41}"), (0x9B9C, "\u{5C46}"),
    (0x9B9D, "\u{5C4E}"), (0x9B9E, "\u{5C53}"), (0x9B9F, "\u{5C50}"), (0x9BA0, "\u{5C4F}"),
    (0x9BA1, "\u{5B71}"), (0x9BA2, "\u{5C6C}"), (0x9BA3, "\u{5C6E}"), (0x9BA4, "\u{4E62}"),
    (0x9BA5, "\u{5C76}"), (0x9BA6, "\u{5C79}"), (0x9BA7, "\u{5C8C}"), (0x9BA8, "\u{5C91}"),
    (0x9BA9, "\u{5C94}"), (0x9BAA, "\u{599B}"), (0x9BAB, "\u{5CAB}"), (0x9BAC, "\u{5CBB}"),
    (0x9BAD, "\u{5CB6}"), (0x9BAE, "\u{5CBC}"), (0x9BAF, "\u{5CB7}"), (0x9BB0, "\u{5CC5}"),
    (0x9BB1, "\u{5CBE}"), (0x9BB2, "\u{5CC7}"), (0x9BB3, "\u{5CD9}"), (0x9BB4, "\u{5CE9}"),
    (0x9BB5, "\u{5CFD}"), (0x9BB6, "\u{5CFA}"), (0x9BB7, "\u{5CED}"), (0x9BB8, "\u{5D8C}"),
    (0x9BB9, "\u{5CEA}"), (0x9BBA, "\u{5D0B}"), (0x9BBB, "\u{5D15}"), (0x9BBC, "\u{5D17}"),
    (0x9BBD, "\u{5D5C}"), (0x9BBE, "\u{5D1F}"), (0x9BBF, "\u{5D1B}"), (0x9BC0, "\u{5D11}"),
    (0x9BC1, "\u{5D14}"), (0x9BC2, "\u{5D22}"), (0x9BC3, "\u{5D1A}"), (0x9BC4, "\u{5D19}"),
    (0x9BC5, "\u{5D18}"), (0x9BC6, "\u{5D4C}"), (0x9BC7, "\u{5D52}"), (0x9BC8, "\u{5D4E}"),
    (0x9BC9, "\u{5D4B}"), (0x9BCA, "\u{5D6C}"), (0x9BCB, "\u{5D73}"), (0x9BCC, "\u{5D76}"),
    (0x9BCD, "\u{5D87}"), (0x9BCE, "\u{5D84}"), (0x9BCF, "\u{5D82}"), (0x9BD0, "\u{5DA2}"),
    (0x9BD1, "\u{5D9D}"), (0x9BD2, "\u{5DAC}"), (0x9BD3, "\u{5DAE}"), (0x9BD4, "\u{5DBD}"),
    (0x9BD5, "\u{5D90}"), (0x9BD6, "\u{5DB7}"), (0x9BD7, "\u{5DBC}"), (0x9BD8, "\u{5DC9}"),
    (0x9BD9, "\u{5DCD}"), (0x9BDA, "\u{5DD3}"), (0x9BDB, "\u{5DD2}"), (0x9BDC, "\u{5DD6}"),
    (0x9BDD, "\u{5DDB}"), (0x9BDE, "\u{5DEB}"), (0x9BDF, "\u{5DF2}"), (0x9BE0, "\u{5DF5}"),
    (0x9BE1, "\u{5E0B}"), (0x9BE2, "\u{5E1A}"), (0x9BE3, "\u{5E19}"), (0x9BE4, "\u{5E11}"),
    (0x9BE5, "\u{5E1B}"), (0x9BE6, "\u{5E36}"), (0x9BE7, "\u{5E37}"), (0x9BE8, "\u{5E44}"),
    (0x9BE9, "\u{5E43}"), (0x9BEA, "\u{5E40}"), (0x9BEB, "\u{5E4E}"), (0x9BEC, "\u{5E57}"),
    (0x9BED, "\u{5E54}"), (0x9BEE, "\u{5E5F}"), (0x9BEF, "\u{5E62}"), (0x9BF0, "\u{5E64}"),
    (0x9BF1, "\u{5E47}"), (0x9BF2, "\u{5E75}"), (0x9BF3, "\u{5E76}"), (0x9BF4, "\u{5E7A}"),
    (0x9BF5, "\u{9EBC}"), (0x9BF6, "\u{5E7F}"), (0x9BF7, "\u{5EA0}"), (0x9BF8, "\u{5EC1}"),
    (0x9BF9, "\u{5EC2}"), (0x9BFA, "\u{5EC8}"), (0x9BFB, "\u{5ED0}"), (0x9BFC, "\u{5ECF}"),
    (0x9C40, "\u{5ED6}"), (0x9C41, "\u{5EE3}"), (0x9C42, "\u{5EDD}"), (0x9C43, "\u{5EDA}"),
    (0x9C44, "\u{5EDB}"), (0x9C45, "\u{5EE2}"), (0x9C46, "\u{5EE1}"), (0x9C47, "\u{5EE8}"),
    (0x9C48, "\u{5EE9}"), (0x9C49, "\u{5EEC}"), (0x9C4A, "\u{5EF1}"), (0x9C4B, "\u{5EF3}"),
    (0x9C4C, "\u{5EF0}"), (0x9C4D, "\u{5EF4}"), (0x9C4E, "\u{5EF8}"), (0x9C4F, "\u{5EFE}"),
    (0x9C50, "\u{5F03}"), (0x9C51, "\u{5F09}"), (0x9C52, "\u{5F5D}"), (0x9C53, "\u{5F5C}"),
    (0x9C54, "\u{5F0B}"), (0x9C55, "\u{5F11}"), (0x9C56, "\u{5F16}"), (0x9C57, "\u{5F29}"),
    (0x9C58, "\u{5F2D}"), (0x9C59, "\u{5F38}"), (0x9C5A, "\u{5F41}"), (0x9C5B, "\u{5F48}"),
    (0x9C5C, "\u{5F4C}"), (0x9C5D, "\u{5F4E}"), (0x9C5E, "\u{5F2F}"), (0x9C5F, "\u{5F51}"),
    (0x9C60, "\u{5F56}"), (0x9C61, "\u{5F57}"), (0x9C62, "\u{5F59}"), (0x9C63, "\u{5F61}"),
    (0x9C64, "\u{5F6D}"), (0x9C65, "\u{5F73}"), (0x9C66, "\u{5F77}"), (0x9C67, "\u{5F83}"),
    (0x9C68, "\u{5F82}"), (0x9C69, "\u{5F7F}"), (0x9C6A, "\u{5F8A}"), (0x9C6B, "\u{5F88}"),
    (0x9C6C, "\u{5F91}"), (0x9C6D, "\u{5F87}"), (0x9C6E, "\u{5F9E}"), (0x9C6F, "\u{5F99}"),
    (0x9C70, "\u{5F98}"), (0x9C71, "\u{5FA0}"), (0x9C72, "\u{5FA8}"), (0x9C73, "\u{5FAD}"),
    (0x9C74, "\u{5FBC}"), (0x9C75, "\u{5FD6}"), (0x9C76, "\u{5FFB}"), (0x9C77, "\u{5FE4}"),
    (0x9C78, "\u{5FF8}"), (0x9C79, "\u{5FF1}"), (0x9C7A, "\u{5FDD}"), (0x9C7B, "\u{60B3}"),
    (0x9C7C, "\u{5FFF}"), (0x9C7D, "\u{6021}"), (0x9C7E, "\u{6060}"), (0x9C80, "\u{6019}"),
    (0x9C81, "\u{6010}"), (0x9C82, "\u{6029}"), (0x9C83, "\u{600E}"), (0x9C84, "\u{6031}"),
    (0x9C85, "\u{601B}"), (0x9C86, "\u{6015}"), (0x9C87, "\u{602B}"), (0x9C88, "\u{6026}"),
    (0x9C89, "\u{600F}"), (0x9C8A, "\u{603A}"), (0x9C8B, "\u{605A}"), (0x9C8C, "\u{6041}"),
    (0x9C8D, "\u{606A}"), (0x9C8E, "\u{6077}"), (0x9C8F, "\u{605F}"), (0x9C90, "\u{604A}"),
    (0x9C91, "\u{6046}"), (0x9C92, "\u{604D}"), (0x9C93, "\u{6063}"), (0x9C94, "\u{6043}"),
    (0x9C95, "\u{6064}"), (0x9C96, "\u{6042}"), (0x9C97, "\u{606C}"), (0x9C98, "\u{606B}"),
    (0x9C99, "\u{6059}"), (0x9C9A, "\u{6081}"), (0x9C9B, "\u{608D}"), (0x9C9C, "\u{60E7}"),
    (0x9C9D, "\u{6083}"), (0x9C9E, "\u{609A}"), (0x9C9F, "\u{6084}"), (0x9CA0, "\u{609B}"),
    (0x9CA1, "\u{6096}"), (0x9CA2, "\u{6097}"), (0x9CA3, "\u{6092}"), (0x9CA4, "\u{60A7}"),
    (0x9CA5, "\u{608B}"), (0x9CA6, "\u{60E1}"), (0x9CA7, "\u{60B8}"), (0x9CA8, "\u{60E0}"),
    (0x9CA9, "\u{60D3}"), (0x9CAA, "\u{60B4}"), (0x9CAB, "\u{5FF0}"), (0x9CAC, "\u{60BD}"),
    (0x9CAD, "\u{60C6}"), (0x9CAE, "\u{60B5}"), (0x9CAF, "\u{60D8}"), (0x9CB0, "\u{614D}"),
    (0x9CB1, "\u{6115}"), (0x9CB2, "\u{6106}"), (0x9CB3, "\u{60F6}"), (0x9CB4, "\u{60F7}"),
    (0x9CB5, "\u{6100}"), (0x9CB6, "\u{60F4}"), (0x9CB7, "\u{60FA}"), (0x9CB8, "\u{6103}"),
    (0x9CB9, "\u{6121}"), (0x9CBA, "\u{60FB}"), (0x9CBB, "\u{60F1}"), (0x9CBC, "\u{610D}"),
    (0x9CBD, "\u{610E}"), (0x9CBE, "\u{6147}"), (0x9CBF, "\u{613E}"), (0x9CC0, "\u{6128}"),
    (0x9CC1, "\u{6127}"), (0x9CC2, "\u{614A}"), (0x9CC3, "\u{613F}"), (0x9CC4, "\u{613C}"),
    (0x9CC5, "\u{612C}"), (0x9CC6, "\u{6134}"), (0x9CC7, "\u{613D}"), (0x9CC8, "\u{6142}"),
    (0x9CC9, "\u{6144}"), (0x9CCA, "\u{6173}"), (0x9CCB, "\u{6177}"), (0x9CCC, "\u{6158}"),
    (0x9CCD, "\u{6159}"), (0x9CCE, "\u{615A}"), (0x9CCF, "\u{616B}"), (0x9CD0, "\u{6174}"),
    (0x9CD1, "\u{616F}"), (0x9CD2, "\u{6165}"), (0x9CD3, "\u{6171}"), (0x9CD4, "\u{615F}"),
    (0x9CD5, "\u{615D}"), (0x9CD6, "\u{6153}"), (0x9CD7, "\u{6175}"), (0x9CD8, "\u{6199}"),
    (0x9CD9, "\u{6196}"), (0x9CDA, "\u{6187}"), (0x9CDB, "\u{61AC}"), (0x9CDC, "\u{6194}"),
    (0x9CDD, "\u{619A}"), (0x9CDE, "\u{618A}"), (0x9CDF, "\u{6191}"), (0x9CE0, "\u{61AB}"),
    (0x9CE1, "\u{61AE}"), (0x9CE2, "\u{61CC}"), (0x9CE3, "\u{61CA}"), (0x9CE4, "\u{61C9}"),
    (0x9CE5, "\u{61F7}"), (0x9CE6, "\u{61C8}"), (0x9CE7, "\u{61C3}"), (0x9CE8, "\u{61C6}"),
    (0x9CE9, "\u{61BA}"), (0x9CEA, "\u{61CB}"), (0x9CEB, "\u{7F79}"), (0x9CEC, "\u{61CD}"),
    (0x9CED, "\u{61E6}"), (0x9CEE, "\u{61E3}"), (0x9CEF, "\u{61F6}"), (0x9CF0, "\u{61FA}"),
    (0x9CF1, "\u{61F4}"), (0x9CF2, "\u{61FF}"), (0x9CF3, "\u{61FD}"), (0x9CF4, "\u{61FC}"),
    (0x9CF5, "\u{61FE}"), (0x9CF6, "\u{6200}"), (0x9CF7, "\u{6208}"), (0x9CF8, "\u{6209}"),
    (0x9CF9, "\u{620D}"), (0x9CFA, "\u{620C}"), (0x9CFB, "\u{6214}"), (0x9CFC, "\u{621B}"),
    (0x9D40, "\u{621E}"), (0x9D41, "\u{6221}"), (0x9D42, "\u{622A}"), (0x9D43, "\u{622E}"),
    (0x9D44, "\u{6230}"), (0x9D45, "\u{6232}"), (0x9D46, "\u{6233}"), (0x9D47, "\u{6241}"),
    (0x9D48, "\u{624E}"), (0x9D49, "\u{625E}"), (0x9D4A, "\u{6263}"), (0x9D4B, "\u{625B}"),
    (0x9D4C, "\u{6260}"), (0x9D4D, "\u{6268}"), (0x9D4E, "\u{627C}"), (0x9D4F, "\u{6282}"),
    (0x9D50, "\u{6289}"), (0x9D51, "\u{627E}"), (0x9D52, "\u{6292}"), (0x9D53, "\u{6293}"),
    (0x9D54, "\u{6296}"), (0x9D55, "\u{62D4}"), (0x9D56, "\u{6283}"), (0x9D57, "\u{6294}"),
    (0x9D58, "\u{62D7}"), (0x9D59, "\u{62D1}"), (0x9D5A, "\u{62BB}"), (0x9D5B, "\u{62CF}"),
    (0x9D5C, "\u{62FF}"), (0x9D5D, "\u{62C6}"), (0x9D5E, "\u{64D4}"), (0x9D5F, "\u{62C8}"),
    (0x9D60, "\u{62DC}"), (0x9D61, "\u{62CC}"), (0x9D62, "\u{62CA}"), (0x9D63, "\u{62C2}"),
    (0x9D64, "\u{62C7}"), (0x9D65, "\u{629B}"), (0x9D66, "\u{62C9}"), (0x9D67, "\u{630C}"),
    (0x9D68, "\u{62EE}"), (0x9D69, "\u{62F1}"), (0x9D6A, "\u{6327}"), (0x9D6B, "\u{6302}"),
    (0x9D6C, "\u{6308}"), (0x9D6D, "\u{62EF}"), (0x9D6E, "\u{62F5}"), (0x9D6F, "\u{6350}"),
    (0x9D70, "\u{633E}"), (0x9D71, "\u{634D}"), (0x9D72, "\u{641C}"), (0x9D73, "\u{634F}"),
    (0x9D74, "\u{6396}"), (0x9D75, "\u{638E}"), (0x9D76, "\u{6380}"), (0x9D77, "\u{63AB}"),
    (0x9D78, "\u{6376}"), (0x9D79, "\u{63A3}"), (0x9D7A, "\u{638F}"), (0x9D7B, "\u{6389}"),
    (0x9D7C, "\u{639F}"), (0x9D7D, "\u{63B5}"), (0x9D7E, "\u{636B}"), (0x9D80, "\u{6369}"),
    (0x9D81, "\u{63BE}"), (0x9D82, "\u{63E9}"), (0x9D83, "\u{63C0}"), (0x9D84, "\u{63C6}"),
    (0x9D85, "\u{63E3}"), (0x9D86, "\u{63C9}"), (0x9D87, "\u{63D2}"), (0x9D88, "\u{63F6}"),
    (0x9D89, "\u{63C4}"), (0x9D8A, "\u{6416}"), (0x9D8B, "\u{6434}"), (0x9D8C, "\u{6406}"),
    (0x9D8D, "\u{6413}"), (0x9D8E, "\u{6426}"), (0x9D8F, "\u{6436}"), (0x9D90, "\u{651D}"),
    (0x9D91, "\u{6417}"), (0x9D92, "\u{6428}"), (0x9D93, "\u{640F}"), (0x9D94, "\u{6467}"),
    (0x9D95, "\u{646F}"), (0x9D96, "\u{6476}"), (0x9D97, "\u{644E}"), (0x9D98, "\u{652A}"),
    (0x9D99, "\u{6495}"), (0x9D9A, "\u{6493}"), (0x9D9B, "\u{64A5}"), (0x9D9C, "\u{64A9}"),
    (0x9D9D, "\u{6488}"), (0x9D9E, "\u{64BC}"), (0x9D9F, "\u{64DA}"), (0x9DA0, "\u{64D2}"),
    (0x9DA1, "\u{64C5}"), (0x9DA2, "\u{64C7}"), (0x9DA3, "\u{64BB}"), (0x9DA4, "\u{64D8}"),
    (0x9DA5, "\u{64C2}"), (0x9DA6, "\u{64F1}"), (0x9DA7, "\u{64E7}"), (0x9DA8, "\u{8209}"),
    (0x9DA9, "\u{64E0}"), (0x9DAA, "\u{64E1}"), (0x9DAB, "\u{62AC}"), (0x9DAC, "\u{64E3}"),
    (0x9DAD, "\u{64EF}"), (0x9DAE, "\u{652C}"), (0x9DAF, "\u{64F6}"), (0x9DB0, "\u{64F4}"),
    (0x9DB1, "\u{64F2}"), (0x9DB2, "\u{64FA}"), (0x9DB3, "\u{6500}"), (0x9DB4, "\u{64FD}"),
    (0x9DB5, "\u{6518}"), (0x9DB6, "\u{651C}"), (0x9DB7, "\u{6505}"), (0x9DB8, "\u{6524}"),
    (0x9DB9, "\u{6523}"), (0x9DBA, "\u{652B}"), (0x9DBB, "\u{6534}"), (0x9DBC, "\u{6535}"),
    (0x9DBD, "\u{6537}"), (0x9DBE, "\u{6536}"), (0x9DBF, "\u{6538}"), (0x9DC0, "\u{754B}"),
    (0x9DC1, "\u{6548}"), (0x9DC2, "\u{6556}"), (0x9DC3, "\u{6555}"), (0x9DC4, "\u{654D}"),
    (0x9DC5, "\u{6558}"), (0x9DC6, "\u{655E}"), (0x9DC7, "\u{655D}"), (0x9DC8, "\u{6572}"),
    (0x9DC9, "\u{6578}"), (0x9DCA, "\u{6582}"), (0x9DCB, "\u{6583}"), (0x9DCC, "\u{8B8A}"),
    (0x9DCD, "\u{659B}"), (0x9DCE, "\u{659F}"), (0x9DCF, "\u{65AB}"), (0x9DD0, "\u{65B7}"),
    (0x9DD1, "\u{65C3}"), (0x9DD2, "\u{65C6}"), (0x9DD3, "\u{65C1}"), (0x9DD4, "\u{65C4}"),
    (0x9DD5, "\u{65CC}"), (0x9DD6, "\u{65D2}"), (0x9DD7, "\u{65DB}"), (0x9DD8, "\u{65D9}"),
    (0x9DD9, "\u{65E0}"), (0x9DDA, "\u{65E1}"), (0x9DDB, "\u{65F1}"), (0x9DDC, "\u{6772}"),
    (0x9DDD, "\u{660A}"), (0x9DDE, "\u{6603}"), (0x9DDF, "\u{65FB}"), (0x9DE0, "\u{6773}"),
    (0x9DE1, "\u{6635}"), (0x9DE2, "\u{6636}"), (0x9DE3, "\u{6634}"), (0x9DE4, "\u{661C}"),
    (0x9DE5, "\u{664F}"), (0x9DE6, "\u{6644}"), (0x9DE7, "\u{6649}"), (0x9DE8, "\u{6641}"),
    (0x9DE9, "\u{665E}"), (0x9DEA, "\u{665D}"), (0x9DEB, "\u{6664}"), (0x9DEC, "\u{6667}"),
    (0x9DED, "\u{6668}"), (0x9DEE, "\u{665F}"), (0x9DEF, "\u{6662}"), (0x9DF0, "\u{6670}"),
    (0x9DF1, "\u{6683}"), (0x9DF2, "\u{6688}"), (0x9DF3, "\u{668E}"), (0x9DF4, "\u{6689}"),
    (0x9DF5, "\u{6684}"), (0x9DF6, "\u{6698}"), (0x9DF7, "\u{669D}"), (0x9DF8, "\u{66C1}"),
    (0x9DF9, "\u{66B9}"), (0x9DFA, "\u{66C9}"), (0x9DFB, "\u{66BE}"), (0x9DFC, "\u{66BC}"),
    (0x9E40, "\u{66C4}"), (0x9E41, "\u{66B8}"), (0x9E42, "\u{66D6}"), (0x9E43, "\u{66DA}"),
    (0x9E44, "\u{66E0}"), (0x9E45, "\u{663F}"), (0x9E46, "\u{66E6}"), (0x9E47, "\u{66E9}"),
    (0x9E48, "\u{66F0}"), (0x9E49, "\u{66F5}"), (0x9E4A, "\u{66F7}"), (0x9E4B, "\u{670F}"),
    (0x9E4C, "\u{6716}"), (0x9E4D, "\u{671E}"), (0x9E4E, "\u{6726}"), (0x9E4F, "\u{6727}"),
    (0x9E50, "\u{9738}"), (0x9E51, "\u{672E}"), (0x9E52, "\u{673F}"), (0x9E53, "\u{6736}"),
    (0x9E54, "\u{6741}"), (0x9E55, "\u{6738}"), (0x9E56, "\u{6737}"), (0x9E57, "\u{6746}"),
    (0x9E58, "\u{675E}"), (0x9E59, "\u{6760}"), (0x9E5A, "\u{6759}"), (0x9E5B, "\u{6763}"),
    (0x9E5C, "\u{6764}"), (0x9E5D, "\u{6789}"), (0x9E5E, "\u{6770}"), (0x9E5F, "\u{67A9}"),
    (0x9E60, "\u{677C}"), (0x9E61, "\u{676A}"), (0x9E62, "\u{678C}"), (0x9E63, "\u{678B}"),
    (0x9E64, "\u{67A6}"), (0x9E65, "\u{67A1}"), (0x9E66, "\u{6785}"), (0x9E67, "\u{67B7}"),
    (0x9E68, "\u{67EF}"), (0x9E69, "\u{67B4}"), (0x9E6A, "\u{67EC}"), (0x9E6B, "\u{67B3}"),
    (0x9E6C, "\u{67E9}"), (0x9E6D, "\u{67B8}"), (0x9E6E, "\u{67E4}"), (0x9E6F, "\u{67DE}"),
    (0x9E70, "\u{67DD}"), (0x9E71, "\u{67E2}"), (0x9E72, "\u{67EE}"), (0x9E73, "\u{67B9}"),
    (0x9E74, "\u{67CE}"), (0x9E75, "\u{67C6}"), (0x9E76, "\u{67E7}"), (0x9E77, "\u{6A9C}"),
    (0x9E78, "\u{681E}"), (0x9E79, "\u{6846}"), (0x9E7A, "\u{6829}"), (0x9E7B, "\u{6840}"),
    (0x9E7C, "\u{684D}"), (0x9E7D, "\u{6832}"), (0x9E7E, "\u{684E}"), (0x9E80, "\u{68B3}"),
    (0x9E81, "\u{682B}"), (0x9E82, "\u{6859}"), (0x9E83, "\u{6863}"), (0x9E84, "\u{6877}"),
    (0x9E85, "\u{687F}"), (0x9E86, "\u{689F}"), (0x9E87, "\u{688F}"), (0x9E88, "\u{68AD}"),
    (0x9E89, "\u{6894}"), (0x9E8A, "\u{689D}"), (0x9E8B, "\u{689B}"), (0x9E8C, "\u{6883}"),
    (0x9E8D, "\u{6AAE}"), (0x9E8E, "\u{68B9}"), (0x9E8F, "\u{6874}"), (0x9E90, "\u{68B5}"),
    (0x9E91, "\u{68A0}"), (0x9E92, "\u{68BA}"), (0x9E93, "\u{690F}"), (0x9E94, "\u{688D}"),
    (0x9E95, "\u{687E}"), (0x9E96, "\u{6901}"), (0x9E97, "\u{68CA}"), (0x9E98, "\u{6908}"),
    (0x9E99, "\u{68D8}"), (0x9E9A, "\u{6922}"), (0x9E9B, "\u{6926}"), (0x9E9C, "\u{68E1}"),
    (0x9E9D, "\u{690C}"), (0x9E9E, "\u{68CD}"), (0x9E9F, "\u{68D4}"), (0x9EA0, "\u{68E7}"),
    (0x9EA1, "\u{68D5}"), (0x9EA2, "\u{6936}"), (0x9EA3, "\u{6912}"), (0x9EA4, "\u{6904}"),
    (0x9EA5, "\u{68D7}"), (0x9EA6, "\u{68E3}"), (0x9EA7, "\u{6925}"), (0x9EA8, "\u{68F9}"),
    (0x9EA9, "\u{68E0}"), (0x9EAA, "\u{68EF}"), (0x9EAB, "\u{6928}"), (0x9EAC, "\u{692A}"),
    (0x9EAD, "\u{691A}"), (0x9EAE, "\u{6923}"), (0x9EAF, "\u{6921}"), (0x9EB0, "\u{68C6}"),
    (0x9EB1, "\u{6979}"), (0x9EB2, "\u{6977}"), (0x9EB3, "\u{695C}"), (0x9EB4, "\u{6978}"),
    (0x9EB5, "\u{696B}"), (0x9EB6, "\u{6954}"), (0x9EB7, "\u{697E}"), (0x9EB8, "\u{696E}"),
    (0x9EB9, "\u{6939}"), (0x9EBA, "\u{6974}"), (0x9EBB, "\u{693D}"), (0x9EBC, "\u{6959}"),
    (0x9EBD, "\u{6930}"), (0x9EBE, "\u{6961}"), (0x9EBF, "\u{695E}"), (0x9EC0, "\u{695D}"),
    (0x9EC1, "\u{6981}"), (0x9EC2, "\u{696A}"), (0x9EC3, "\u{69B2}"), (0x9EC4, "\u{69AE}"),
    (0x9EC5, "\u{69D0}"), (0x9EC6, "\u{69BF}"), (0x9EC7, "\u{69C1}"), (0x9EC8, "\u{69D3}"),
    (0x9EC9, "\u{69BE}"), (0x9ECA, "\u{69CE}"), (0x9ECB, "\u{5BE8}"), (0x9ECC, "\u{69CA}"),
    (0x9ECD, "\u{69DD}"), (0x9ECE, "\u{69BB}"), (0x9ECF, "\u{69C3}"), (0x9ED0, "\u{69A7}"),
    (0x9ED1, "\u{6A2E}"), (0x9ED2, "\u{6991}"), (0x9ED3, "\u{69A0}"), (0x9ED4, "\u{699C}"),
    (0x9ED5, "\u{6995}"), (0x9ED6, "\u{69B4}"), (0x9ED7, "\u{69DE}"), (0x9ED8, "\u{69E8}"),
    (0x9ED9, "\u{6A02}"), (0x9EDA, "\u{6A1B}"), (0x9EDB, "\u{69FF}"), (0x9EDC, "\u{6B0A}"),
    (0x9EDD, "\u{69F9}"), (0x9EDE, "\u{69F2}"), (0x9EDF, "\u{69E7}"), (0x9EE0, "\u{6A05}"),
    (0x9EE1, "\u{69B1}"), (0x9EE2, "\u{6A1E}"), (0x9EE3, "\u{69ED}"), (0x9EE4, "\u{6A14}"),
    (0x9EE5, "\u{69EB}"), (0x9EE6, "\u{6A0A}"), (0x9EE7, "\u{6A12}"), (0x9EE8, "\u{6AC1}"),
    (0x9EE9, "\u{6A23}"), (0x9EEA, "\u{6A13}"), (0x9EEB, "\u{6A44}"), (0x9EEC, "\u{6A0C}"),
    (0x9EED, "\u{6A72}"), (0x9EEE, "\u{6A36}"), (0x9EEF, "\u{6A78}"), (0x9EF0, "\u{6A47}"),
    (0x9EF1, "\u{6A62}"), (0x9EF2, "\u{6A59}"), (0x9EF3, "\u{6A66}"), (0x9EF4, "\u{6A48}"),
    (0x9EF5, "\u{6A38}"), (0x9EF6, "\u{6A22}"), (0x9EF7, "\u{6A90}"), (0x9EF8, "\u{6A8D}"),
    (0x9EF9, "\u{6AA0}"), (0x9EFA, "\u{6A84}"), (0x9EFB, "\u{6AA2}"), (0x9EFC, "\u{6AA3}"),
    (0x9F40, "\u{6A97}"), (0x9F41, "\u{8617}"), (0x9F42, "\u{6ABB}"), (0x9F43, "\u{6AC3}"),
    (0x9F44, "\u{6AC2}"), (0x9F45, "\u{6AB8}"), (0x9F46, "\u{6AB3}"), (0x9F47, "\u{6AAC}"),
    (0x9F48, "\u{6ADE}"), (0x9F49, "\u{6AD1}"), (0x9F4A, "\u{6ADF}"), (0x9F4B, "\u{6AAA}"),
    (0x9F4C, "\u{6ADA}"), (0x9F4D, "\u{6AEA}"), (0x9F4E, "\u{6AFB}"), (0x9F4F, "\u{6B05}"),
    (0x9F50, "\u{8616}"), (0x9F51, "\u{6AFA}"), (0x9F52, "\u{6B12}"), (0x9F53, "\u{6B16}"),
    (0x9F54, "\u{9B31}"), (0x9F55, "\u{6B1F}"), (0x9F56, "\u{6B38}"), (0x9F57, "\u{6B37}"),
    (0x9F58, "\u{76DC}"), (0x9F59, "\u{6B39}"), (0x9F5A, "\u{98EE}"), (0x9F5B, "\u{6B47}"),
    (0x9F5C, "\u{6B43}"), (0x9F5D, "\u{6B49}"), (0x9F5E, "\u{6B50}"), (0x9F5F, "\u{6B59}"),
    (0x9F60, "\u{6B54}"), (0x9F61, "\u{6B5B}"), (0x9F62, "\u{6B5F}"), (0x9F63, "\u{6B61}"),
    (0x9F64, "\u{6B78}"), (0x9F65, "\u{6B79}"), (0x9F66, "\u{6B7F}"), (0x9F67, "\u{6B80}"),
    (0x9F68, "\u{6B84}"), (0x9F69, "\u{6B83}"), (0x9F6A, "\u{6B8D}"), (0x9F6B, "\u{6B98}"),
    (0x9F6C, "\u{6B95}"), (0x9F6D, "\u{6B9E}"), (0x9F6E, "\u{6BA4}"), (0x9F6F, "\u{6BAA}"),
    (0x9F70, "\u{6BAB}"), (0x9F71, "\u{6BAF}"), (0x9F72, "\u{6BB2}"), (0x9F73, "\u{6BB1}"),
    (0x9F74, "\u{6BB3}"), (0x9F75, "\u{6BB7}"), (0x9F76, "\u{6BBC}"), (0x9F77, "\u{6BC6}"),
    (0x9F78, "\u{6BCB}"), (0x9F79, "\u{6BD3}"), (0x9F7A, "\u{6BDF}"), (0x9F7B, "\u{6BEC}"),
    (0x9F7C, "\u{6BEB}"), (0x9F7D, "\u{6BF3}"), (0x9F7E, "\u{6BEF}"), (0x9F80, "\u{9EBE}"),
    (0x9F81, "\u{6C08}"), (0x9F82, "\u{6C13}"), (0x9F83, "\u{6C14}"), (0x9F84, "\u{6C1B}"),
    (0x9F85, "\u{6C24}"), (0x9F86, "\u{6C23}"), (0x9F87, "\u{6C5E}"), (0x9F88, "\u{6C55}"),
    (0x9F89, "\u{6C62}"), (0x9F8A, "\u{6C6A}"), (0x9F8B, "\u{6C82}"), (0x9F8C, "\u{6C8D}"),
    (0x9F8D, "\u{6C9A}"), (0x9F8E, "\u{6C81}"), (0x9F8F, "\u{6C9B}"), (0x9F90, "\u{6C7E}"),
    (0x9F91, "\u{6C68}"), (0x9F92, "\u{6C73}"), (0x9F93, "\u{6C92}"), (0x9F94, "\u{6C90}"),
    (0x9F95, "\u{6CC4}"), (0x9F96, "\u{6CF1}"), (0x9F97, "\u{6CD3}"), (0x9F98, "\u{6CBD}"),
    (0x9F99, "\u{6CD7}"), (0x9F9A, "\u{6CC5}"), (0x9F9B, "\u{6CDD}"), (0x9F9C, "\u{6CAE}"),
    (0x9F9D, "\u{6CB1}"), (0x9F9E, "\u{6CBE}"), (0x9F9F, "\u{6CBA}"), (0x9FA0, "\u{6CDB}"),
    (0x9FA1, "\u{6CEF}"), (0x9FA2, "\u{6CD9}"), (0x9FA3, "\u{6CEA}"), (0x9FA4, "\u{6D1F}"),
    (0x9FA5, "\u{884D}"), (0x9FA6, "\u{6D36}"), (0x9FA7, "\u{6D2B}"), (0x9FA8, "\u{6D3D}"),
    (0x9FA9, "\u{6D38}"), (0x9FAA, "\u{6D19}"), (0x9FAB, "\u{6D35}"), (0x9FAC, "\u{6D33}"),
    (0x9FAD, "\u{6D12}"), (0x9FAE, "\u{6D0C}"), (0x9FAF, "\u{6D63}"), (0x9FB0, "\u{6D93}"),
    (0x9FB1, "\u{6D64}"), (0x9FB2, "\u{6D5A}"), (0x9FB3, "\u{6D79}"), (0x9FB4, "\u{6D59}"),
    (0x9FB5, "\u{6D8E}"), (0x9FB6, "\u{6D95}"), (0x9FB7, "\u{6FE4}"), (0x9FB8, "\u{6D85}"),
    (0x9FB9, "\u{6DF9}"), (0x9FBA, "\u{6E15}"), (0x9FBB, "\u{6E0A}"), (0x9FBC, "\u{6DB5}"),
    (0x9FBD, "\u{6DC7}"), (0x9FBE, "\u{6DE6}"), (0x9FBF, "\u{6DB8}"), (0x9FC0, "\u{6DC6}"),
    (0x9FC1, "\u{6DEC}"), (0x9FC2, "\u{6DDE}"), (0x9FC3, "\u{6DCC}"), (0x9FC4, "\u{6DE8}"),
    (0x9FC5, "\u{6DD2}"), (0x9FC6, "\u{6DC5}"), (0x9FC7, "\u{6DFA}"), (0x9FC8, "\u{6DD9}"),
    (0x9FC9, "\u{6DE4}"), (0x9FCA, "\u{6DD5}"), (0x9FCB, "\u{6DEA}"), (0x9FCC, "\u{6DEE}"),
    (0x9FCD, "\u{6E2D}"), (0x9FCE, "\u{6E6E}"), (0x9FCF, "\u{6E2E}"), (0x9FD0, "\u{6E19}"),
    (0x9FD1, "\u{6E72}"), (0x9FD2, "\u{6E5F}"), (0x9FD3, "\u{6E3E}"), (0x9FD4, "\u{6E23}"),
    (0x9FD5, "\u{6E6B}"), (0x9FD6, "\u{6E2B}"), (0x9FD7, "\u{6E76}"), (0x9FD8, "\u{6E4D}"),
    (0x9FD9, "\u{6E1F}"), (0x9FDA, "\u{6E43}"), (0x9FDB, "\u{6E3A}"), (0x9FDC, "\u{6E4E}"),
    (0x9FDD, "\u{6E24}"), (0x9FDE, "\u{6EFF}"), (0x9FDF, "\u{6E1D}"), (0x9FE0, "\u{6E38}"),
    (0x9FE1, "\u{6E82}"), (0x9FE2, "\u{6EAA}"), (0x9FE3, "\u{6E98}"), (0x9FE4, "\u{6EC9}"),
    (0x9FE5, "\u{6EB7}"), (0x9FE6, "\u{6ED3}"), (0x9FE7, "\u{6EBD}"), (0x9FE8, "\u{6EAF}"),
    (0x9FE9, "\u{6EC4}"), (0x9FEA, "\u{6EB2}"), (0x9FEB, "\u{6ED4}"), (0x9FEC, "\u{6ED5}"),
    (0x9FED, "\u{6E8F}"), (0x9FEE, "\u{6EA5}"), (0x9FEF, "\u{6EC2}"), (0x9FF0, "\u{6E9F}"),
    (0x9FF1, "\u{6F41}"), (0x9FF2, "\u{6F11}"), (0x9FF3, "\u{704C}"), (0x9FF4, "\u{6EEC}"),
    (0x9FF5, "\u{6EF8}"), (0x9FF6, "\u{6EFE}"), (0x9FF7, "\u{6F3F}"), (0x9FF8, "\u{6EF2}"),
    (0x9FF9, "\u{6F31}"), (0x9FFA, "\u{6EEF}"), (0x9FFB, "\u{6F32}"), (0x9FFC, "\u{6ECC}"),
    (0xE040, "\u{6F3E}"), (0xE041, "\u{6F13}"), (0xE042, "\u{6EF7}"), (0xE043, "\u{6F86}"),
    (0xE044, "\u{6F7A}"), (0xE045, "\u{6F78}"), (0xE046, "\u{6F81}"), (0xE047, "\u{6F80}"),
    (0xE048, "\u{6F6F}"), (0xE049, "\u{6F5B}"), (0xE04A, "\u{6FF3}"), (0xE04B, "\u{6F6D}"),
    (0xE04C, "\u{6F82}"), (0xE04D, "\u{6F7C}"), (0xE04E, "\u{6F58}"), (0xE04F, "\u{6F8E}"),
    (0xE050, "\u{6F91}"), (0xE051, "\u{6FC2}"), (0xE052, "\u{6F66}"), (0xE053, "\u{6FB3}"),
    (0xE054, "\u{6FA3}"), (0xE055, "\u{6FA1}"), (0xE056, "\u{6FA4}"), (0xE057, "\u{6FB9}"),
    (0xE058, "\u{6FC6}"), (0xE059, "\u{6FAA}"), (0xE05A, "\u{6FDF}"), (0xE05B, "\u{6FD5}"),
    (0xE05C, "\u{6FEC}"), (0xE05D, "\u{6FD4}"), (0xE05E, "\u{6FD8}"), (0xE05F, "\u{6FF1}"),
    (0xE060, "\u{6FEE}"), (0xE061, "\u{6FDB}"), (0xE062, "\u{7009}"), (0xE063, "\u{700B}"),
    (0xE064, "\u{6FFA}"), (0xE065, "\u{7011}"), (0xE066, "\u{7001}"), (0xE067, "\u{700F}"),
    (0xE068, "\u{6FFE}"), (0xE069, "\u{701B}"), (0xE06A, "\u{701A}"), (0xE06B, "\u{6F74}"),
    (0xE06C, "\u{701D}"), (0xE06D, "\u{7018}"), (0xE06E, "\u{701F}"), (0xE06F, "\u{7030}"),
    (0xE070, "\u{703E}"), (0xE071, "\u{7032}"), (0xE072, "\u{7051}"), (0xE073, "\u{7063}"),
    (0xE074, "\u{7099}"), (0xE075, "\u{7092}"), (0xE076, "\u{70AF}"), (0xE077, "\u{70F1}"),
    (0xE078, "\u{70AC}"), (0xE079, "\u{70B8}"), (0xE07A, "\u{70B3}"), (0xE07B, "\u{70AE}"),
    (0xE07C, "\u{70DF}"), (0xE07D, "\u{70CB}"), (0xE07E, "\u{70DD}"), (0xE080, "\u{70D9}"),
    (0xE081, "\u{7109}"), (0xE082, "\u{70FD}"), (0xE083, "\u{711C}"), (0xE084, "\u{7119}"),
    (0xE085, "\u{7165}"), (0xE086, "\u{7155}"), (0xE087, "\u{7188}"), (0xE088, "\u{7166}"),
    (0xE089, "\u{7162}"), (0xE08A, "\u{714C}"), (0xE08B, "\u{7156}"), (0xE08C, "\u{716C}"),
    (0xE08D, "\u{718F}"), (0xE08E, "\u{71FB}"), (0xE08F, "\u{7184}"), (0xE090, "\u{7195}"),
    (0xE091, "\u{71A8}"), (0xE092, "\u{71AC}"), (0xE093, "\u{71D7}"), (0xE094, "\u{71B9}"),
    (0xE095, "\u{71BE}"), (0xE096, "\u{71D2}"), (0xE097, "\u{71C9}"), (0xE098, "\u{71D4}"),
    (0xE099, "\u{71CE}"), (0xE09A, "\u{71E0}"), (0xE09B, "\u{71EC}"), (0xE09C, "\u{71E7}"),
    (0xE09D, "\u{71F5}"), (0xE09E, "\u{71FC}"), (0xE09F, "\u{71F9}"), (0xE0A0, "\u{71FF}"),
    (0xE0A1, "\u{720D}"), (0xE0A2, "\u{7210}"), (0xE0A3, "\u{721B}"), (0xE0A4, "\u{7228}"),
    (0xE0A5, "\u{722D}"), (0xE0A6, "\u{722C}"), (0xE0A7, "\u{7230}"), (0xE0A8, "\u{7232}"),
    (0xE0A9, "\u{723B}"), (0xE0AA, "\u{723C}"), (0xE0AB, "\u{723F}"), (0xE0AC, "\u{7240}"),
    (0xE0AD, "\u{7246}"), (0xE0AE, "\u{724B}"), (0xE0AF, "\u{7258}"), (0xE0B0, "\u{7274}"),
    (0xE0B1, "\u{727E}"), (0xE0B2, "\u{7282}"), (0xE0B3, "\u{7281}"), (0xE0B4, "\u{7287}"),
    (0xE0B5, "\u{7292}"), (0xE0B6, "\u{7296}"), (0xE0B7, "\u{72A2}"), (0xE0B8, "\u{72A7}"),
    (0xE0B9, "\u{72B9}"), (0xE0BA, "\u{72B2}"), (0xE0BB, "\u{72C3}"), (0xE0BC, "\u{72C6}"),
    (0xE0BD, "\u{72C4}"), (0xE0BE, "\u{72CE}"), (0xE0BF, "\u{72D2}"), (0xE0C0, "\u{72E2}"),
    (0xE0C1, "\u{72E0}"), (0xE0C2, "\u{72E1}"), (0xE0C3, "\u{72F9}"), (0xE0C4, "\u{72F7}"),
    (0xE0C5, "\u{500F}"), (0xE0C6, "\u{7317}"), (0xE0C7, "\u{730A}"), (0xE0C8, "\u{731C}"),
    (0xE0C9, "\u{7316}"), (0xE0CA, "\u{731D}"), (0xE0CB, "\u{7334}"), (0xE0CC, "\u{732F}"),
    (0xE0CD, "\u{7329}"), (0xE0CE, "\u{7325}"), (0xE0CF, "\u{733E}"), (0xE0D0, "\u{734E}"),
    (0xE0D1, "\u{734F}"), (0xE0D2, "\u{9ED8}"), (0xE0D3, "\u{7357}"), (0xE0D4, "\u{736A}"),
    (0xE0D5, "\u{7368}"), (0xE0D6, "\u{7370}"), (0xE0D7, "\u{7378}"), (0xE0D8, "\u{7375}"),
    (0xE0D9, "\u{737B}"), (0xE0DA, "\u{737A}"), (0xE0DB, "\u{73C8}"), (0xE0DC, "\u{73B3}"),
    (0xE0DD, "\u{73CE}"), (0xE0DE, "\u{73BB}"), (0xE0DF, "\u{73C0}"), (0xE0E0, "\u{73E5}"),
    (0xE0E1, "\u{73EE}"), (0xE0E2, "\u{73DE}"), (0xE0E3, "\u{74A2}"), (0xE0E4, "\u{7405}"),
    (0xE0E5, "\u{746F}"), (0xE0E6, "\u{7425}"), (0xE0E7, "\u{73F8}"), (0xE0E8, "\u{7432}"),
    (0xE0E9, "\u{743A}"), (0xE0EA, "\u{7455}"), (0xE0EB, "\u{743F}"), (0xE0EC, "\u{745F}"),
    (0xE0ED, "\u{7459}"), (0xE0EE, "\u{7441}"), (0xE0EF, "\u{745C}"), (0xE0F0, "\u{7469}"),
    (0xE0F1, "\u{7470}"), (0xE0F2, "\u{7463}"), (0xE0F3, "\u{746A}"), (0xE0F4, "\u{7476}"),
    (0xE0F5, "\u{747E}"), (0xE0F6, "\u{748B}"), (0xE0F7, "\u{749E}"), (0xE0F8, "\u{74A7}"),
    (0xE0F9, "\u{74CA}"), (0xE0FA, "\u{74CF}"), (0xE0FB, "\u{74D4}"), (0xE0FC, "\u{73F1}"),
    (0xE140, "\u{74E0}"), (0xE141, "\u{74E3}"), (0xE142, "\u{74E7}"), (0xE143, "\u{74E9}"),
    (0xE144, "\u{74EE}"), (0xE145, "\u{74F2}"), (0xE146, "\u{74F0}"), (0xE147, "\u{74F1}"),
    (0xE148, "\u{74F8}"), (0xE149, "\u{74F7}"), (0xE14A, "\u{7504}"), (0xE14B, "\u{7503}"),
    (0xE14C, "\u{7505}"), (0xE14D, "\u{750C}"), (0xE14E, "\u{750E}"), (0xE14F, "\u{750D}"),
    (0xE150, "\u{7515}"), (0xE151, "\u{7513}"), (0xE152, "\u{751E}"), (0xE153, "\u{7526}"),
    (0xE154, "\u{752C}"), (0xE155, "\u{753C}"), (0xE156, "\u{7544}"), (0xE157, "\u{754D}"),
    (0xE158, "\u{754A}"), (0xE159, "\u{7549}"), (0xE15A, "\u{755B}"), (0xE15B, "\u{7546}"),
    (0xE15C, "\u{755A}"), (0xE15D, "\u{7569}"), (0xE15E, "\u{7564}"), (0xE15F, "\u{7567}"),
    (0xE160, "\u{756B}"), (0xE161, "\u{756D}"), (0xE162, "\u{7578}"), (0xE163, "\u{7576}"),
    (0xE164, "\u{7586}"), (0xE165, "\u{7587}"), (0xE166, "\u{7574}"), (0xE167, "\u{758A}"),
    (0xE168, "\u{7589}"), (0xE169, "\u{7582}"), (0xE16A, "\u{7594}"), (0xE16B, "\u{759A}"),
    (0xE16C, "\u{759D}"), (0xE16D, "\u{75A5}"), (0xE16E, "\u{75A3}"), (0xE16F, "\u{75C2}"),
    (0xE170, "\u{75B3}"), (0xE171, "\u{75C3}"), (0xE172, "\u{75B5}"), (0xE173, "\u{75BD}"),
    (0xE174, "\u{75B8}"), (0xE175, "\u{75BC}"), (0xE176, "\u{75B1}"), (0xE177, "\u{75CD}"),
    (0xE178, "\u{75CA}"), (0xE179, "\u{75D2}"), (0xE17A, "\u{75D9}"), (0xE17B, "\u{75E3}"),
    (0xE17C, "\u{75DE}"), (0xE17D, "\u{75FE}"), (0xE17E, "\u{75FF}"), (0xE180, "\u{75FC}"),
    (0xE181, "\u{7601}"), (0xE182, "\u{75F0}"), (0xE183, "\u{75FA}"), (0xE184, "\u{75F2}"),
    (0xE185, "\u{75F3}"), (0xE186, "\u{760B}"), (0xE187, "\u{760D}"), (0xE188, "\u{7609}"),
    (0xE189, "\u{761F}"), (0xE18A, "\u{7627}"), (0xE18B, "\u{7620}"), (0xE18C, "\u{7621}"),
    (0xE18D, "\u{7622}"), (0xE18E, "\u{7624}"), (0xE18F, "\u{7634}"), (0xE190, "\u{7630}"),
    (0xE191, "\u{763B}"), (0xE192, "\u{7647}"), (0xE193, "\u{7648}"), (0xE194, "\u{7646}"),
    (0xE195, "\u{765C}"), (0xE196, "\u{7658}"), (0xE197, "\u{7661}"), (0xE198, "\u{7662}"),
    (0xE199, "\u{7668}"), (0xE19A, "\u{7669}"), (0xE19B, "\u{766A}"), (0xE19C, "\u{7667}"),
    (0xE19D, "\u{766C}"), (0xE19E, "\u{7670}"), (0xE19F, "\u{7672}"), (0xE1A0, "\u{7676}"),
    (0xE1A1, "\u{7678}"), (0xE1A2, "\u{767C}"), (0xE1A3, "\u{7680}"), (0xE1A4, "\u{7683}"),
    (0xE1A5, "\u{7688}"), (0xE1A6, "\u{768B}"), (0xE1A7, "\u{768E}"), (0xE1A8, "\u{7696}"),
    (0xE1A9, "\u{7693}"), (0xE1AA, "\u{7699}"), (0xE1AB, "\u{769A}"), (0xE1AC, "\u{76B0}"),
    (0xE1AD, "\u{76B4}"), (0xE1AE, "\u{76B8}"), (0xE1AF, "\u{76B9}"), (0xE1B0, "\u{76BA}"),
    (0xE1B1, "\u{76C2}"), (0xE1B2, "\u{76CD}"), (0xE1B3, "\u{76D6}"), (0xE1B4, "\u{76D2}"),
    (0xE1B5, "\u{76DE}"), (0xE1B6, "\u{76E1}"), (0xE1B7, "\u{76E5}"), (0xE1B8, "\u{76E7}"),
    (0xE1B9, "\u{76EA}"), (0xE1BA, "\u{862F}"), (0xE1BB, "\u{76FB}"), (0xE1BC, "\u{7708}"),
    (0xE1BD, "\u{7707}"), (0xE1BE, "\u{7704}"), (0xE1BF, "\u{7729}"), (0xE1C0, "\u{7724}"),
    (0xE1C1, "\u{771E}"), (0xE1C2, "\u{7725}"), (0xE1C3, "\u{7726}"), (0xE1C4, "\u{771B}"),
    (0xE1C5, "\u{7737}"), (0xE1C6, "\u{7738}"), (0xE1C7, "\u{7747}"), (0xE1C8, "\u{775A}"),
    (0xE1C9, "\u{7768}"), (0xE1CA, "\u{776B}"), (0xE1CB, "\u{775B}"), (0xE1CC, "\u{7765}"),
    (0xE1CD, "\u{777F}"), (0xE1CE, "\u{777E}"), (0xE1CF, "\u{7779}"), (0xE1D0, "\u{778E}"),
    (0xE1D1, "\u{778B}"), (0xE1D2, "\u{7791}"), (0xE1D3, "\u{77A0}"), (0xE1D4, "\u{779E}"),
    (0xE1D5, "\u{77B0}"), (0xE1D6, "\u{77B6}"), (0xE1D7, "\u{77B9}"), (0xE1D8, "\u{77BF}"),
    (0xE1D9, "\u{77BC}"), (0xE1DA, "\u{77BD}"), (0xE1DB, "\u{77BB}"), (0xE1DC, "\u{77C7}"),
    (0xE1DD, "\u{77CD}"), (0xE1DE, "\u{77D7}"), (0xE1DF, "\u{77DA}"), (0xE1E0, "\u{77DC}"),
    (0xE1E1, "\u{77E3}"), (0xE1E2, "\u{77EE}"), (0xE1E3, "\u{77FC}"), (0xE1E4, "\u{780C}"),
    (0xE1E5, "\u{7812}"), (0xE1E6, "\u{7926}"), (0xE1E7, "\u{7820}"), (0xE1E8, "\u{792A}"),
    (0xE1E9, "\u{7845}"), (0xE1EA, "\u{788E}"), (0xE1EB, "\u{7874}"), (0xE1EC, "\u{7886}"),
    (0xE1ED, "\u{787C}"), (0xE1EE, "\u{789A}"), (0xE1EF, "\u{788C}"), (0xE1F0, "\u{78A3}"),
    (0xE1F1, "\u{78B5}"), (0xE1F2, "\u{78AA}"), (0xE1F3, "\u{78AF}"), (0xE1F4, "\u{78D1}"),
    (0xE1F5, "\u{78C6}"), (0xE1F6, "\u{78CB}"), (0xE1F7, "\u{78D4}"), (0xE1F8, "\u{78BE}"),
    (0xE1F9, "\u{78BC}"), (0xE1FA, "\u{78C5}"), (0xE1FB, "\u{78CA}"), (0xE1FC, "\u{78EC}"),
    (0xE240, "\u{78E7}"), (0xE241, "\u{78DA}"), (0xE242, "\u{78FD}"), (0xE243, "\u{78F4}"),
    (0xE244, "\u{7907}"), (0xE245, "\u{7912}"), (0xE246, "\u{7911}"), (0xE247, "\u{7919}"),
    (0xE248, "\u{792C}"), (0xE249, "\u{792B}"), (0xE24A, "\u{7940}"), (0xE24B, "\u{7960}"),
    (0xE24C, "\u{7957}"), (0xE24D, "\u{795F}"), (0xE24E, "\u{795A}"), (0xE24F, "\u{7955}"),
    (0xE250, "\u{7953}"), (0xE251, "\u{797A}"), (0xE252, "\u{797F}"), (0xE253, "\u{798A}"),
    (0xE254, "\u{799D}"), (0xE255, "\u{79A7}"), (0xE256, "\u{9F4B}"), (0xE257, "\u{79AA}"),
    (0xE258, "\u{79AE}"), (0xE259, "\u{79B3}"), (0xE25A, "\u{79B9}"), (0xE25B, "\u{79BA}"),
    (0xE25C, "\u{79C9}"), (0xE25D, "\u{79D5}"), (0xE25E, "\u{79E7}"), (0xE25F, "\u{79EC}"),
    (0xE260, "\u{79E1}"), (0xE261, "\u{79E3}"), (0xE262, "\u{7A08}"), (0xE263, "\u{7A0D}"),
    (0xE264, "\u{7A18}"), (0xE265, "\u{7A19}"), (0xE266, "\u{7A20}"), (0xE267, "\u{7A1F}"),
    (0xE268, "\u{7980}"), (0xE269, "\u{7A31}"), (0xE26A, "\u{7A3B}"), (0xE26B, "\u{7A3E}"),
    (0xE26C, "\u{7A37}"), (0xE26D, "\u{7A43}"), (0xE26E, "\u{7A57}"), (0xE26F, "\u{7A49}"),
    (0xE270, "\u{7A61}"), (0xE271, "\u{7A62}"), (0xE272, "\u{7A69}"), (0xE273, "\u{9F9D}"),
    (0xE274, "\u{7A70}"), (0xE275, "\u{7A79}"), (0xE276, "\u{7A7D}"), (0xE277, "\u{7A88}"),
    (0xE278, "\u{7A97}"), (0xE279, "\u{7A95}"), (0xE27A, "\u{7A98}"), (0xE27B, "\u{7A96}"),
    (0xE27C, "\u{7AA9}"), (0xE27D, "\u{7AC8}"), (0xE27E, "\u{7AB0}"), (0xE280, "\u{7AB6}"),
    (0xE281, "\u{7AC5}"), (0xE282, "\u{7AC4}"), (0xE283, "\u{7ABF}"), (0xE284, "\u{9083}"),
    (0xE285, "\u{7AC7}"), (0xE286, "\u{7ACA}"), (0xE287, "\u{7ACD}"), (0xE288, "\u{7ACF}"),
    (0xE289, "\u{7AD5}"), (0xE28A, "\u{7AD3}"), (0xE28B, "\u{7AD9}"), (0xE28C, "\u{7ADA}"),
    (0xE28D, "\u{7ADD}"), (0xE28E, "\u{7AE1}"), (0xE28F, "\u{7AE2}"), (0xE290, "\u{7AE6}"),
    (0xE291, "\u{7AED}"), (0xE292, "\u{7AF0}"), (0xE293, "\u{7B02}"), (0xE294, "\u{7B0F}"),
    (0xE295, "\u{7B0A}"), (0xE296, "\u{7B06}"), (0xE297, "\u{7B33}"), (0xE298, "\u{7B18}"),
    (0xE299, "\u{7B19}"), (0xE29A, "\u{7B1E}"), (0xE29B, "\u{7B35}"), (0xE29C, "\u{7B28}"),
    (0xE29D, "\u{7B36}"), (0xE29E, "\u{7B50}"), (0xE29F, "\u{7B7A}"), (0xE2A0, "\u{7B04}"),
    (0xE2A1, "\u{7B4D}"), (0xE2A2, "\u{7B0B}"), (0xE2A3, "\u{7B4C}"), (0xE2A4, "\u{7B45}"),
    (0xE2A5, "\u{7B75}"), (0xE2A6, "\u{7B65}"), (0xE2A7, "\u{7B74}"), (0xE2A8, "\u{7B67}"),
    (0xE2A9, "\u{7B70}"), (0xE2AA, "\u{7B71}"), (0xE2AB, "\u{7B6C}"), (0xE2AC, "\u{7B6E}"),
    (0xE2AD, "\u{7B9D}"), (0xE2AE, "\u{7B98}"), (0xE2AF, "\u{7B9F}"), (0xE2B0, "\u{7B8D}"),
    (0xE2B1, "\u{7B9C}"), (0xE2B2, "\u{7B9A}"), (0xE2B3, "\u{7B8B}"), (0xE2B4, "\u{7B92}"),
    (0xE2B5, "\u{7B8F}"), (0xE2B6, "\u{7B5D}"), (0xE2B7, "\u{7B99}"), (0xE2B8, "\u{7BCB}"),
    (0xE2B9, "\u{7BC1}"), (0xE2BA, "\u{7BCC}"), (0xE2BB, "\u{7BCF}"), (0xE2BC, "\u{7BB4}"),
    (0xE2BD, "\u{7BC6}"), (0xE2BE, "\u{7BDD}"), (0xE2BF, "\u{7BE9}"), (0xE2C0, "\u{7C11}"),
    (0xE2C1, "\u{7C14}"), (0xE2C2, "\u{7BE6}"), (0xE2C3, "\u{7BE5}"), (0xE2C4, "\u{7C60}"),
    (0xE2C5, "\u{7C00}"), (0xE2C6, "\u{7C07}"), (0xE2C7, "\u{7C13}"), (0xE2C8, "\u{7BF3}"),
    (0xE2C9, "\u{7BF7}"), (0xE2CA, "\u{7C17}"), (0xE2CB, "\u{7C0D}"), (0xE2CC, "\u{7BF6}"),
    (0xE2CD, "\u{7C23}"), (0xE2CE, "\u{7C27}"), (0xE2CF, "\u{7C2A}"), (0xE2D0, "\u{7C1F}"),
    (0xE2D1, "\u{7C37}"), (0xE2D2, "\u{7C2B}"), (0xE2D3, "\u{7C3D}"), (0xE2D4, "\u{7C4C}"),
    (0xE2D5, "\u{7C43}"), (0xE2D6, "\u{7C54}"), (0xE2D7, "\u{7C4F}"), (0xE2D8, "\u{7C40}"),
    (0xE2D9, "\u{7C50}"), (0xE2DA, "\u{7C58}"), (0xE2DB, "\u{7C5F}"), (0xE2DC, "\u{7C64}"),
    (0xE2DD, "\u{7C56}"), (0xE2DE, "\u{7C65}"), (0xE2DF, "\u{7C6C}"), (0xE2E0, "\u{7C75}"),
    (0xE2E1, "\u{7C83}"), (0xE2E2, "\u{7C90}"), (0xE2E3, "\u{7CA4}"), (0xE2E4, "\u{7CAD}"),
    (0xE2E5, "\u{7CA2}"), (0xE2E6, "\u{7CAB}"), (0xE2E7, "\u{7CA1}"), (0xE2E8, "\u{7CA8}"),
    (0xE2E9, "\u{7CB3}"), (0xE2EA, "\u{7CB2}"), (0xE2EB, "\u{7CB1}"), (0xE2EC, "\u{7CAE}"),
    (0xE2ED, "\u{7CB9}"), (0xE2EE, "\u{7CBD}"), (0xE2EF, "\u{7CC0}"), (0xE2F0, "\u{7CC5}"),
    (0xE2F1, "\u{7CC2}"), (0xE2F2, "\u{7CD8}"), (0xE2F3, "\u{7CD2}"), (0xE2F4, "\u{7CDC}"),
    (0xE2F5, "\u{7CE2}"), (0xE2F6, "\u{9B3B}"), (0xE2F7, "\u{7CEF}"), (0xE2F8, "\u{7CF2}"),
    (0xE2F9, "\u{7CF4}"), (0xE2FA, "\u{7CF6}"), (0xE2FB, "\u{7CFA}"), (0xE2FC, "\u{7D06}"),
    (0xE340, "\u{7D02}"), (0xE341, "\u{7D1C}"), (0xE342, "\u{7D15}"), (0xE343, "\u{7D0A}"),
    (0xE344, "\u{7D45}"), (0xE345, "\u{7D4B}"), (0xE346, "\u{7D2E}"), (0xE347, "\u{7D32}"),
    (0xE348, "\u{7D3F}"), (0xE349, "\u{7D35}"), (0xE34A, "\u{7D46}"), (0xE34B, "\u{7D73}"),
    (0xE34C, "\u{7D56}"), (0xE34D, "\u{7D4E}"), (0xE34E, "\u{7D72}"), (0xE34F, "\u{7D68}"),
    (0xE350, "\u{7D6E}"), (0xE351, "\u{7D4F}"), (0xE352, "\u{7D63}"), (0xE353, "\u{7D93}"),
    (0xE354, "\u{7D89}"), (0xE355, "\u{7D5B}"), (0xE356, "\u{7D8F}"), (0xE357, "\u{7D7D}"),
    (0xE358, "\u{7D9B}"), (0xE359, "\u{7DBA}"), (0xE35A, "\u{7DAE}"), (0xE35B, "\u{7DA3}"),
    (0xE35C, "\u{7DB5}"), (0xE35D, "\u{7DC7}"), (0xE35E, "\u{7DBD}"), (0xE35F, "\u{7DAB}"),
    (0xE360, "\u{7E3D}"), (0xE361, "\u{7DA2}"), (0xE362, "\u{7DAF}"), (0xE363, "\u{7DDC}"),
    (0xE364, "\u{7DB8}"), (0xE365, "\u{7D9F}"), (0xE366, "\u{7DB0}"), (0xE367, "\u{7DD8}"),
    (0xE368, "\u{7DDD}"), (0xE369, "\u{7DE4}"), (0xE36A, "\u{7DDE}"), (0xE36B, "\u{7DFB}"),
    (0xE36C, "\u{7DF2}"), (0xE36D, "\u{7DE1}"), (0xE36E, "\u{7E05}"), (0xE36F, "\u{7E0A}"),
    (0xE370, "\u{7E23}"), (0xE371, "\u{7E21}"), (0xE372, "\u{7E12}"), (0xE373, "\u{7E31}"),
    (0xE374, "\u{7E1F}"), (0xE375, "\u{7E09}"), (0xE376, "\u{7E0B}"), (0xE377, "\u{7E22}"),
    (0xE378, "\u{7E46}"), (0xE379, "\u{7E66}"), (0xE37A, "\u{7E3B}"), (0xE37B, "\u{7E35}"),
    (0xE37C, "\u{7E39}"), (0xE37D, "\u{7E43}"), (0xE37E, "\u{7E37}"), (0xE380, "\u{7E32}"),
    (0xE381, "\u{7E3A}"), (0xE382, "\u{7E67}"), (0xE383, "\u{7E5D}"), (0xE384, "\u{7E56}"),
    (0xE385, "\u{7E5E}"), (0xE386, "\u{7E59}"), (0xE387, "\u{7E5A}"), (0xE388, "\u{7E79}"),
    (0xE389, "\u{7E6A}"), (0xE38A, "\u{7E69}"), (0xE38B, "\u{7E7C}"), (0xE38C, "\u{7E7B}"),
    (0xE38D, "\u{7E83}"), (0xE38E, "\u{7DD5}"), (0xE38F, "\u{7E7D}"), (0xE390, "\u{8FAE}"),
    (0xE391, "\u{7E7F}"), (0xE392, "\u{7E88}"), (0xE393, "\u{7E89}"), (0xE394, "\u{7E8C}"),
    (0xE395, "\u{7E92}"), (0xE396, "\u{7E90}"), (0xE397, "\u{7E93}"), (0xE398, "\u{7E94}"),
    (0xE399, "\u{7E96}"), (0xE39A, "\u{7E8E}"), (0xE39B, "\u{7E9B}"), (0xE39C, "\u{7E9C}"),
    (0xE39D, "\u{7F38}"), (0xE39E, "\u{7F3A}"), (0xE39F, "\u{7F45}"), (0xE3A0, "\u{7F4C}"),
    (0xE3A1, "\u{7F4D}"), (0xE3A2, "\u{7F4E}"), (0xE3A3, "\u{7F50}"), (0xE3A4, "\u{7F51}"),
    (0xE3A5, "\u{7F55}"), (0xE3A6, "\u{7F54}"), (0xE3A7, "\u{7F58}"), (0xE3A8, "\u{7F5F}"),
    (0xE3A9, "\u{7F60}"), (0xE3AA, "\u{7F68}"), (0xE3AB, "\u{7F69}"), (0xE3AC, "\u{7F67}"),
    (0xE3AD, "\u{7F78}"), (0xE3AE, "\u{7F82}"), (0xE3AF, "\u{7F86}"), (0xE3B0, "\u{7F83}"),
    (0xE3B1, "\u{7F88}"), (0xE3B2, "\u{7F87}"), (0xE3B3, "\u{7F8C}"), (0xE3B4, "\u{7F94}"),
    (0xE3B5, "\u{7F9E}"), (0xE3B6, "\u{7F9D}"), (0xE3B7, "\u{7F9A}"), (0xE3B8, "\u{7FA3}"),
    (0xE3B9, "\u{7FAF}"), (0xE3BA, "\u{7FB2}"), (0xE3BB, "\u{7FB9}"), (0xE3BC, "\u{7FAE}"),
    (0xE3BD, "\u{7FB6}"), (0xE3BE, "\u{7FB8}"), (0xE3BF, "\u{8B71}"), (0xE3C0, "\u{7FC5}"),
    (0xE3C1, "\u{7FC6}"), (0xE3C2, "\u{7FCA}"), (0xE3C3, "\u{7FD5}"), (0xE3C4, "\u{7FD4}"),
    (0xE3C5, "\u{7FE1}"), (0xE3C6, "\u{7FE6}"), (0xE3C7, "\u{7FE9}"), (0xE3C8, "\u{7FF3}"),
    (0xE3C9, "\u{7FF9}"), (0xE3CA, "\u{98DC}"), (0xE3CB, "\u{8006}"), (0xE3CC, "\u{8004}"),
    (0xE3CD, "\u{800B}"), (0xE3CE, "\u{8012}"), (0xE3CF, "\u{8018}"), (0xE3D0, "\u{8019}"),
    (0xE3D1, "\u{801C}"), (0xE3D2, "\u{8021}"), (0xE3D3, "\u{8028}"), (0xE3D4, "\u{803F}"),
    (0xE3D5, "\u{803B}"), (0xE3D6, "\u{804A}"), (0xE3D7, "\u{8046}"), (0xE3D8, "\u{8052}"),
    (0xE3D9, "\u{8058}"), (0xE3DA, "\u{805A}"), (0xE3DB, "\u{805F}"), (0xE3DC, "\u{8062}"),
    (0xE3DD, "\u{8068}"), (0xE3DE, "\u{8073}"), (0xE3DF, "\u{8072}"), (0xE3E0, "\u{8070}"),
    (0xE3E1, "\u{8076}"), (0xE3E2, "\u{8079}"), (0xE3E3, "\u{807D}"), (0xE3E4, "\u{807F}"),
    (0xE3E5, "\u{8084}"), (0xE3E6, "\u{8086}"), (0xE3E7, "\u{8085}"), (0xE3E8, "\u{809B}"),
    (0xE3E9, "\u{8093}"), (0xE3EA, "\u{809A}"), (0xE3EB, "\u{80AD}"), (0xE3EC, "\u{5190}"),
    (0xE3ED, "\u{80AC}"), (0xE3EE, "\u{80DB}"), (0xE3EF, "\u{80E5}"), (0xE3F0, "\u{80D9}"),
    (0xE3F1, "\u{80DD}"), (0xE3F2, "\u{80C4}"), (0xE3F3, "\u{80DA}"), (0xE3F4, "\u{80D6}"),
    (0xE3F5, "\u{8109}"), (0xE3F6, "\u{80EF}"), (0xE3F7, "\u{80F1}"), (0xE3F8, "\u{811B}"),
    (0xE3F9, "\u{8129}"), (0xE3FA, "\u{8123}"), (0xE3FB, "\u{812F}"), (0xE3FC, "\u{814B}"),
    (0xE440, "\u{968B}"), (0xE441, "\u{8146}"), (0xE442, "\u{813E}"), (0xE443, "\u{8153}"),
    (0xE444, "\u{8151}"), (0xE445, "\u{80FC}"), (0xE446, "\u{8171}"), (0xE447, "\u{816E}"),
    (0xE448, "\u{8165}"), (0xE449, "\u{8166}"), (0xE44A, "\u{8174}"), (0xE44B, "\u{8183}"),
    (0xE44C, "\u{8188}"), (0xE44D, "\u{818A}"), (0xE44E, "\u{8180}"), (0xE44F, "\u{8182}"),
    (0xE450, "\u{81A0}"), (0xE451, "\u{8195}"), (0xE452, "\u{81A4}"), (0xE453, "\u{81A3}"),
    (0xE454, "\u{815F}"), (0xE455, "\u{8193}"), (0xE456, "\u{81A9}"), (0xE457, "\u{81B0}"),
    (0xE458, "\u{81B5}"), (0xE459, "\u{81BE}"), (0xE45A, "\u{81B8}"), (0xE45B, "\u{81BD}"),
    (0xE45C, "\u{81C0}"), (0xE45D, "\u{81C2}"), (0xE45E, "\u{81BA}"), (0xE45F, "\u{81C9}"),
    (0xE460, "\u{81CD}"), (0xE461, "\u{81D1}"), (0xE462, "\u{81D9}"), (0xE463, "\u{81D8}"),
    (0xE464, "\u{81C8}"), (0xE465, "\u{81DA}"), (0xE466, "\u{81DF}"), (0xE467, "\u{81E0}"),
    (0xE468, "\u{81E7}"), (0xE469, "\u{81FA}"), (0xE46A, "\u{81FB}"), (0xE46B, "\u{81FE}"),
    (0xE46C, "\u{8201}"), (0xE46D, "\u{8202}"), (0xE46E, "\u{8205}"), (0xE46F, "\u{8207}"),
    (0xE470, "\u{820A}"), (0xE471, "\u{820D}"), (0xE472, "\u{8210}"), (0xE473, "\u{8216}"),
    (0xE474, "\u{8229}"), (0xE475, "\u{822B}"), (0xE476, "\u{8238}"), (0xE477, "\u{8233}"),
    (0xE478, "\u{8240}"), (0xE479, "\u{8259}"), (0xE47A, "\u{8258}"), (0xE47B, "\u{825D}"),
    (0xE47C, "\u{825A}"), (0xE47D, "\u{825F}"), (0xE47E, "\u{8264}"), (0xE480, "\u{8262}"),
    (0xE481, "\u{8268}"), (0xE482, "\u{826A}"), (0xE483, "\u{826B}"), (0xE484, "\u{822E}"),
    (0xE485, "\u{8271}"), (0xE486, "\u{8277}"), (0xE487, "\u{8278}"), (0xE488, "\u{827E}"),
    (0xE489, "\u{828D}"), (0xE48A, "\u{8292}"), (0xE48B, "\u{82AB}"), (0xE48C, "\u{829F}"),
    (0xE48D, "\u{82BB}"), (0xE48E, "\u{82AC}"), (0xE48F, "\u{82E1}"), (0xE490, "\u{82E3}"),
    (0xE491, "\u{82DF}"), (0xE492, "\u{82D2}"), (0xE493, "\u{82F4}"), (0xE494, "\u{82F3}"),
    (0xE495, "\u{82FA}"), (0xE496, "\u{8393}"), (0xE497, "\u{8303}"), (0xE498, "\u{82FB}"),
    (0xE499, "\u{82F9}"), (0xE49A, "\u{82DE}"), (0xE49B, "\u{8306}"), (0xE49C, "\u{82DC}"),
    (0xE49D, "\u{8309}"), (0xE49E, "\u{82D9}"), (0xE49F, "\u{8335}"), (0xE4A0, "\u{8334}"),
    (0xE4A1, "\u{8316}"), (0xE4A2, "\u{8332}"), (0xE4A3, "\u{8331}"), (0xE4A4, "\u{8340}"),
    (0xE4A5, "\u{8339}"), (0xE4A6, "\u{8350}"), (0xE4A7, "\u{8345}"), (0xE4A8, "\u{832F}"),
    (0xE4A9, "\u{832B}"), (0xE4AA, "\u{8317}"), (0xE4AB, "\u{8318}"), (0xE4AC, "\u{8385}"),
    (0xE4AD, "\u{839A}"), (0xE4AE, "\u{83AA}"), (0xE4AF, "\u{839F}"), (0xE4B0, "\u{83A2}"),
    (0xE4B1, "\u{8396}"), (0xE4B2, "\u{8323}"), (0xE4B3, "\u{838E}"), (0xE4B4, "\u{8387}"),
    (0xE4B5, "\u{838A}"), (0xE4B6, "\u{837C}"), (0xE4B7, "\u{83B5}"), (0xE4B8, "\u{8373}"),
    (0xE4B9, "\u{8375}"), (0xE4BA, "\u{83A0}"), (0xE4BB, "\u{8389}"), (0xE4BC, "\u{83A8}"),
    (0xE4BD, "\u{83F4}"), (0xE4BE, "\u{8413}"), (0xE4BF, "\u{83EB}"), (0xE4C0, "\u{83CE}"),
    (0xE4C1, "\u{83FD}"), (0xE4C2, "\u{8403}"), (0xE4C3, "\u{83D8}"), (0xE4C4, "\u{840B}"),
    (0xE4C5, "\u{83C1}"), (0xE4C6, "\u{83F7}"), (0xE4C7, "\u{8407}"), (0xE4C8, "\u{83E0}"),
    (0xE4C9, "\u{83F2}"), (0xE4CA, "\u{840D}"), (0xE4CB, "\u{8422}"), (0xE4CC, "\u{8420}"),
    (0xE4CD, "\u{83BD}"), (0xE4CE, "\u{8438}"), (0xE4CF, "\u{8506}"), (0xE4D0, "\u{83FB}"),
    (0xE4D1, "\u{846D}"), (0xE4D2, "\u{842A}"), (0xE4D3, "\u{843C}"), (0xE4D4, "\u{855A}"),
    (0xE4D5, "\u{8484}"), (0xE4D6, "\u{8477}"), (0xE4D7, "\u{846B}"), (0xE4D8, "\u{84AD}"),
    (0xE4D9, "\u{846E}"), (0xE4DA, "\u{8482}"), (0xE4DB, "\u{8469}"), (0xE4DC, "\u{8446}"),
    (0xE4DD, "\u{842C}"), (0xE4DE, "\u{846F}"), (0xE4DF, "\u{8479}"), (0xE4E0, "\u{8435}"),
    (0xE4E1, "\u{84CA}"), (0xE4E2, "\u{8462}"), (0xE4E3, "\u{84B9}"), (0xE4E4, "\u{84BF}"),
    (0xE4E5, "\u{849F}"), (0xE4E6, "\u{84D9}"), (0xE4E7, "\u{84CD}"), (0xE4E8, "\u{84BB}"),
    (0xE4E9, "\u{84DA}"), (0xE4EA, "\u{84D0}"), (0xE4EB, "\u{84C1}"), (0xE4EC, "\u{84C6}"),
    (0xE4ED, "\u{84D6}"), (0xE4EE, "\u{84A1}"), (0xE4EF, "\u{8521}"), (0xE4F0, "\u{84FF}"),
    (0xE4F1, "\u{84F4}"), (0xE4F2, "\u{8517}"), (0xE4F3, "\u{8518}"), (0xE4F4, "\u{852C}"),
    (0xE4F5, "\u{851F}"), (0xE4F6, "\u{8515}"), (0xE4F7, "\u{8514}"), (0xE4F8, "\u{84FC}"),
    (0xE4F9, "\u{8540}"), (0xE4FA, "\u{8563}"), (0xE4FB, "\u{8558}"), (0xE4FC, "\u{8548}"),
    (0xE540, "\u{8541}"), (0xE541, "\u{8602}"), (0xE542, "\u{854B}"), (0xE543, "\u{8555}"),
    (0xE544, "\u{8580}"), (0xE545, "\u{85A4}"), (0xE546, "\u{8588}"), (0xE547, "\u{8591}"),
    (0xE548, "\u{858A}"), (0xE549, "\u{85A8}"), (0xE54A, "\u{856D}"), (0xE54B, "\u{8594}"),
    (0xE54C, "\u{859B}"), (0xE54D, "\u{85EA}"), (0xE54E, "\u{8587}"), (0xE54F, "\u{859C}"),
    (0xE550, "\u{8577}"), (0xE551, "\u{857E}"), (0xE552, "\u{8590}"), (0xE553, "\u{85C9}"),
    (0xE554, "\u{85BA}"), (0xE555, "\u{85CF}"), (0xE556, "\u{85B9}"), (0xE557, "\u{85D0}"),
    (0xE558, "\u{85D5}"), (0xE559, "\u{85DD}"), (0xE55A, "\u{85E5}"), (0xE55B, "\u{85DC}"),
    (0xE55C, "\u{85F9}"), (0xE55D, "\u{860A}"), (0xE55E, "\u{8613}"), (0xE55F, "\u{860B}"),
    (0xE560, "\u{85FE}"), (0xE561, "\u{85FA}"), (0xE562, "\u{8606}"), (0xE563, "\u{8622}"),
    (0xE564, "\u{861A}"), (0xE565, "\u{8630}"), (0xE566, "\u{863F}"), (0xE567, "\u{864D}"),
    (0xE568, "\u{4E55}"), (0xE569, "\u{8654}"), (0xE56A, "\u{865F}"), (0xE56B, "\u{8667}"),
    (0xE56C, "\u{8671}"), (0xE56D, "\u{8693}"), (0xE56E, "\u{86A3}"), (0xE56F, "\u{86A9}"),
    (0xE570, "\u{86AA}"), (0xE571, "\u{868B}"), (0xE572, "\u{868C}"), (0xE573, "\u{86B6}"),
    (0xE574, "\u{86AF}"), (0xE575, "\u{86C4}"), (0xE576, "\u{86C6}"), (0xE577, "\u{86B0}"),
    (0xE578, "\u{86C9}"), (0xE579, "\u{8823}"), (0xE57A, "\u{86AB}"), (0xE57B, "\u{86D4}"),
    (0xE57C, "\u{86DE}"), (0xE57D, "\u{86E9}"), (0xE57E, "\u{86EC}"), (0xE580, "\u{86DF}"),
    (0xE581, "\u{86DB}"), (0xE582, "\u{86EF}"), (0xE583, "\u{8712}"), (0xE584, "\u{8706}"),
    (0xE585, "\u{8708}"), (0xE586, "\u{8700}"), (0xE587, "\u{8703}"), (0xE588, "\u{86FB}"),
    (0xE589, "\u{8711}"), (0xE58A, "\u{8709}"), (0xE58B, "\u{870D}"), (0xE58C, "\u{86F9}"),
    (0xE58D, "\u{870A}"), (0xE58E, "\u{8734}"), (0xE58F, "\u{873F}"), (0xE590, "\u{8737}"),
    (0xE591, "\u{873B}"), (0xE592, "\u{8725}"), (0xE593, "\u{8729}"), (0xE594, "\u{871A}"),
    (0xE595, "\u{8760}"), (0xE596, "\u{875F}"), (0xE597, "\u{8778}"), (0xE598, "\u{874C}"),
    (0xE599, "\u{874E}"), (0xE59A, "\u{8774}"), (0xE59B, "\u{8757}"), (0xE59C, "\u{8768}"),
    (0xE59D, "\u{876E}"), (0xE59E, "\u{8759}"), (0xE59F, "\u{8753}"), (0xE5A0, "\u{8763}"),
    (0xE5A1, "\u{876A}"), (0xE5A2, "\u{8805}"), (0xE5A3, "\u{87A2}"), (0xE5A4, "\u{879F}"),
    (0xE5A5, "\u{8782}"), (0xE5A6, "\u{87AF}"), (0xE5A7, "\u{87CB}"), (0xE5A8, "\u{87BD}"),
    (0xE5A9, "\u{87C0}"), (0xE5AA, "\u{87D0}"), (0xE5AB, "\u{96D6}"), (0xE5AC, "\u{87AB}"),
    (0xE5AD, "\u{87C4}"), (0xE5AE, "\u{87B3}"), (0xE5AF, "\u{87C7}"), (0xE5B0, "\u{87C6}"),
    (0xE5B1, "\u{87BB}"), (0xE5B2, "\u{87EF}"), (0xE5B3, "\u{87F2}"), (0xE5B4, "\u{87E0}"),
    (0xE5B5, "\u{880F}"), (0xE5B6, "\u{880D}"), (0xE5B7, "\u{87FE}"), (0xE5B8, "\u{87F6}"),
    (0xE5B9, "\u{87F7}"), (0xE5BA, "\u{880E}"), (0xE5BB, "\u{87D2}"), (0xE5BC, "\u{8811}"),
    (0xE5BD, "\u{8816}"), (0xE5BE, "\u{8815}"), (0xE5BF, "\u{8822}"), (0xE5C0, "\u{8821}"),
    (0xE5C1, "\u{8831}"), (0xE5C2, "\u{8836}"), (0xE5C3, "\u{8839}"), (0xE5C4, "\u{8827}"),
    (0xE5C5, "\u{883B}"), (0xE5C6, "\u{8844}"), (0xE5C7, "\u{8842}"), (0xE5C8, "\u{8852}"),
    (0xE5C9, "\u{8859}"), (0xE5CA, "\u{885E}"), (0xE5CB, "\u{8862}"), (0xE5CC, "\u{886B}"),
    (0xE5CD, "\u{8881}"), (0xE5CE, "\u{887E}"), (0xE5CF, "\u{889E}"), (0xE5D0, "\u{8875}"),
    (0xE5D1, "\u{887D}"), (0xE5D2, "\u{88B5}"), (0xE5D3, "\u{8872}"), (0xE5D4, "\u{8882}"),
    (0xE5D5, "\u{8897}"), (0xE5D6, "\u{8892}"), (0xE5D7, "\u{88AE}"), (0xE5D8, "\u{8899}"),
    (0xE5D9, "\u{88A2}"), (0xE5DA, "\u{888D}"), (0xE5DB, "\u{88A4}"), (0xE5DC, "\u{88B0}"),
    (0xE5DD, "\u{88BF}"), (0xE5DE, "\u{88B1}"), (0xE5DF, "\u{88C3}"), (0xE5E0, "\u{88C4}"),
    (0xE5E1, "\u{88D4}"), (0xE5E2, "\u{88D8}"), (0xE5E3, "\u{88D9}"), (0xE5E4, "\u{88DD}"),
    (0xE5E5, "\u{88F9}"), (0xE5E6, "\u{8902}"), (0xE5E7, "\u{88FC}"), (0xE5E8, "\u{88F4}"),
    (0xE5E9, "\u{88E8}"), (0xE5EA, "\u{88F2}"), (0xE5EB, "\u{8904}"), (0xE5EC, "\u{890C}"),
    (0xE5ED, "\u{890A}"), (0xE5EE, "\u{8913}"), (0xE5EF, "\u{8943}"), (0xE5F0, "\u{891E}"),
    (0xE5F1, "\u{8925}"), (0xE5F2, "\u{892A}"), (0xE5F3, "\u{892B}"), (0xE5F4, "\u{8941}"),
    (0xE5F5, "\u{8944}"), (0xE5F6, "\u{893B}"), (0xE5F7, "\u{8936}"), (0xE5F8, "\u{8938}"),
    (0xE5F9, "\u{894C}"), (0xE5FA, "\u{891D}"), (0xE5FB, "\u{8960}"), (0xE5FC, "\u{895E}"),
    (0xE640, "\u{8966}"), (0xE641, "\u{8964}"), (0xE642, "\u{896D}"), (0xE643, "\u{896A}"),
    (0xE644, "\u{896F}"), (0xE645, "\u{8974}"), (0xE646, "\u{8977}"), (0xE647, "\u{897E}"),
    (0xE648, "\u{8983}"), (0xE649, "\u{8988}"), (0xE64A, "\u{898A}"), (0xE64B, "\u{8993}"),
    (0xE64C, "\u{8998}"), (0xE64D, "\u{89A1}"), (0xE64E, "\u{89A9}"), (0xE64F, "\u{89A6}"),
    (0xE650, "\u{89AC}"), (0xE651, "\u{89AF}"), (0xE652, "\u{89B2}"), (0xE653, "\u{89BA}"),
    (0xE654, "\u{89BD}"), (0xE655, "\u{89BF}"), (0xE656, "\u{89C0}"), (0xE657, "\u{89DA}"),
    (0xE658, "\u{89DC}"), (0xE659, "\u{89DD}"), (0xE65A, "\u{89E7}"), (0xE65B, "\u{89F4}"),
    (0xE65C, "\u{89F8}"), (0xE65D, "\u{8A03}"), (0xE65E, "\u{8A16}"), (0xE65F, "\u{8A10}"),
    (0xE660, "\u{8A0C}"), (0xE661, "\u{8A1B}"), (0xE662, "\u{8A1D}"), (0xE663, "\u{8A25}"),
    (0xE664, "\u{8A36}"), (0xE665, "\u{8A41}"), (0xE666, "\u{8A5B}"), (0xE667, "\u{8A52}"),
    (0xE668, "\u{8A46}"), (0xE669, "\u{8A48}"), (0xE66A, "\u{8A7C}"), (0xE66B, "\u{8A6D}"),
    (0xE66C, "\u{8A6C}"), (0xE66D, "\u{8A62}"), (0xE66E, "\u{8A85}"), (0xE66F, "\u{8A82}"),
    (0xE670, "\u{8A84}"), (0xE671, "\u{8AA8}"), (0xE672, "\u{8AA1}"), (0xE673, "\u{8A91}"),
    (0xE674, "\u{8AA5}"), (0xE675, "\u{8AA6}"), (0xE676, "\u{8A9A}"), (0xE677, "\u{8AA3}"),
    (0xE678, "\u{8AC4}"), (0xE679, "\u{8ACD}"), (0xE67A, "\u{8AC2}"), (0xE67B, "\u{8ADA}"),
    (0xE67C, "\u{8AEB}"), (0xE67D, "\u{8AF3}"), (0xE67E, "\u{8AE7}"), (0xE680, "\u{8AE4}"),
    (0xE681, "\u{8AF1}"), (0xE682, "\u{8B14}"), (0xE683, "\u{8AE0}"), (0xE684, "\u{8AE2}"),
    (0xE685, "\u{8AF7}"), (0xE686, "\u{8ADE}"), (0xE687, "\u{8ADB}"), (0xE688, "\u{8B0C}"),
    (0xE689, "\u{8B07}"), (0xE68A, "\u{8B1A}"), (0xE68B, "\u{8AE1}"), (0xE68C, "\u{8B16}"),
    (0xE68D, "\u{8B10}"), (0xE68E, "\u{8B17}"), (0xE68F, "\u{8B20}"), (0xE690, "\u{8B33}"),
    (0xE691, "\u{97AB}"), (0xE692, "\u{8B26}"), (0xE693, "\u{8B2B}"), (0xE694, "\u{8B3E}"),
    (0xE695, "\u{8B28}"), (0xE696, "\u{8B41}"), (0xE697, "\u{8B4C}"), (0xE698, "\u{8B4F}"),
    (0xE699, "\u{8B4E}"), (0xE69A, "\u{8B49}"), (0xE69B, "\u{8B56}"), (0xE69C, "\u{8B5B}"),
    (0xE69D, "\u{8B5A}"), (0xE69E, "\u{8B6B}"), (0xE69F, "\u{8B5F}"), (0xE6A0, "\u{8B6C}"),
    (0xE6A1, "\u{8B6F}"), (0xE6A2, "\u{8B74}"), (0xE6A3, "\u{8B7D}"), (0xE6A4, "\u{8B80}"),
    (0xE6A5, "\u{8B8C}"), (0xE6A6, "\u{8B8E}"), (0xE6A7, "\u{8B92}"), (0xE6A8, "\u{8B93}"),
    (0xE6A9, "\u{8B96}"), (0xE6AA, "\u{8B99}"), (0xE6AB, "\u{8B9A}"), (0xE6AC, "\u{8C3A}"),
    (0xE6AD, "\u{8C41}"), (0xE6AE, "\u{8C3F}"), (0xE6AF, "\u{8C48}"), (0xE6B0, "\u{8C4C}"),
    (0xE6B1, "\u{8C4E}"), (0xE6B2, "\u{8C50}"), (0xE6B3, "\u{8C55}"), (0xE6B4, "\u{8C62}"),
    (0xE6B5, "\u{8C6C}"), (0xE6B6, "\u{8C78}"), (0xE6B7, "\u{8C7A}"), (0xE6B8, "\u{8C82}"),
    (0xE6B9, "\u{8C89}"), (0xE6BA, "\u{8C85}"), (0xE6BB, "\u{8C8A}"), (0xE6BC, "\u{8C8D}"),
    (0xE6BD, "\u{8C8E}"), (0xE6BE, "\u{8C94}"), (0xE6BF, "\u{8C7C}"), (0xE6C0, "\u{8C98}"),
    (0xE6C1, "\u{621D}"), (0xE6C2, "\u{8CAD}"), (0xE6C3, "\u{8CAA}"), (0xE6C4, "\u{8CBD}"),
    (0xE6C5, "\u{8CB2}"), (0xE6C6, "\u{8CB3}"), (0xE6C7, "\u{8CAE}"), (0xE6C8, "\u{8CB6}"),
    (0xE6C9, "\u{8CC8}"), (0xE6CA, "\u{8CC1}"), (0xE6CB, "\u{8CE4}"), (0xE6CC, "\u{8CE3}"),
    (0xE6CD, "\u{8CDA}"), (0xE6CE, "\u{8CFD}"), (0xE6CF, "\u{8CFA}"), (0xE6D0, "\u{8CFB}"),
    (0xE6D1, "\u{8D04}"), (0xE6D2, "\u{8D05}"), (0xE6D3, "\u{8D0A}"), (0xE6D4, "\u{8D07}"),
    (0xE6D5, "\u{8D0F}"), (0xE6D6, "\u{8D0D}"), (0xE6D7, "\u{8D10}"), (0xE6D8, "\u{9F4E}"),
    (0xE6D9, "\u{8D13}"), (0xE6DA, "\u{8CCD}"), (0xE6DB, "\u{8D14}"), (0xE6DC, "\u{8D16}"),
    (0xE6DD, "\u{8D67}"), (0xE6DE, "\u{8D6D}"), (0xE6DF, "\u{8D71}"), (0xE6E0, "\u{8D73}"),
    (0xE6E1, "\u{8D81}"), (0xE6E2, "\u{8D99}"), (0xE6E3, "\u{8DC2}"), (0xE6E4, "\u{8DBE}"),
    (0xE6E5, "\u{8DBA}"), (0xE6E6, "\u{8DCF}"), (0xE6E7, "\u{8DDA}"), (0xE6E8, "\u{8DD6}"),
    (0xE6E9, "\u{8DCC}"), (0xE6EA, "\u{8DDB}"), (0xE6EB, "\u{8DCB}"), (0xE6EC, "\u{8DEA}"),
    (0xE6ED, "\u{8DEB}"), (0xE6EE, "\u{8DDF}"), (0xE6EF, "\u{8DE3}"), (0xE6F0, "\u{8DFC}"),
    (0xE6F1, "\u{8E08}"), (0xE6F2, "\u{8E09}"), (0xE6F3, "\u{8DFF}"), (0xE6F4, "\u{8E1D}"),
    (0xE6F5, "\u{8E1E}"), (0xE6F6, "\u{8E10}"), (0xE6F7, "\u{8E1F}"), (0xE6F8, "\u{8E42}"),
    (0xE6F9, "\u{8E35}"), (0xE6FA, "\u{8E30}"), (0xE6FB, "\u{8E34}"), (0xE6FC, "\u{8E4A}"),
    (0xE740, "\u{8E47}"), (0xE741, "\u{8E49}"), (0xE742, "\u{8E4C}"), (0xE743, "\u{8E50}"),
    (0xE744, "\u{8E48}"), (0xE745, "\u{8E59}"), (0xE746, "\u{8E64}"), (0xE747, "\u{8E60}"),
    (0xE748, "\u{8E2A}"), (0xE749, "\u{8E63}"), (0xE74A, "\u{8E55}"), (0xE74B, "\u{8E76}"),
    (0xE74C, "\u{8E72}"), (0xE74D, "\u{8E7C}"), (0xE74E, "\u{8E81}"), (0xE74F, "\u{8E87}"),
    (0xE750, "\u{8E85}"), (0xE751, "\u{8E84}"), (0xE752, "\u{8E8B}"), (0xE753, "\u{8E8A}"),
    (0xE754, "\u{8E93}"), (0xE755, "\u{8E91}"), (0xE756, "\u{8E94}"), (0xE757, "\u{8E99}"),
    (0xE758, "\u{8EAA}"), (0xE759, "\u{8EA1}"), (0xE75A, "\u{8EAC}"), (0xE75B, "\u{8EB0}"),
    (0xE75C, "\u{8EC6}"), (0xE75D, "\u{8EB1}"), (0xE75E, "\u{8EBE}"), (0xE75F, "\u{8EC5}"),
    (0xE760, "\u{8EC8}"), (0xE761, "\u{8ECB}"), (0xE762, "\u{8EDB}"), (0xE763, "\u{8EE3}"),
    (0xE764, "\u{8EFC}"), (0xE765, "\u{8EFB}"), (0xE766, "\u{8EEB}"), (0xE767, "\u{8EFE}"),
    (0xE768, "\u{8F0A}"), (0xE769, "\u{8F05}"), (0xE76A, "\u{8F15}"), (0xE76B, "\u{8F12}"),
    (0xE76C, "\u{8F19}"), (0xE76D, "\u{8F13}"), (0xE76E, "\u{8F1C}"), (0xE76F, "\u{8F1F}"),
    (0xE770, "\u{8F1B}"), (0xE771, "\u{8F0C}"), (0xE772, "\u{8F26}"), (0xE773, "\u{8F33}"),
    (0xE774, "\u{8F3B}"), (0xE775, "\u{8F39}"), (0xE776, "\u{8F45}"), (0xE777, "\u{8F42}"),
    (0xE778, "\u{8F3E}"), (0xE779, "\u{8F4C}"), (0xE77A, "\u{8F49}"), (0xE77B, "\u{8F46}"),
    (0xE77C, "\u{8F4E}"), (0xE77D, "\u{8F57}"), (0xE77E, "\u{8F5C}"), (0xE780, "\u{8F62}"),
    (0xE781, "\u{8F63}"), (0xE782, "\u{8F64}"), (0xE783, "\u{8F9C}"), (0xE784, "\u{8F9F}"),
    (0xE785, "\u{8FA3}"), (0xE786, "\u{8FAD}"), (0xE787, "\u{8FAF}"), (0xE788, "\u{8FB7}"),
    (0xE789, "\u{8FDA}"), (0xE78A, "\u{8FE5}"), (0xE78B, "\u{8FE2}"), (0xE78C, "\u{8FEA}"),
    (0xE78D, "\u{8FEF}"), (0xE78E, "\u{9087}"), (0xE78F, "\u{8FF4}"), (0xE790, "\u{9005}"),
    (0xE791, "\u{8FF9}"), (0xE792, "\u{8FFA}"), (0xE793, "\u{9011}"), (0xE794, "\u{9015}"),
    (0xE795, "\u{9021}"), (0xE796, "\u{900D}"), (0xE797, "\u{901E}"), (0xE798, "\u{9016}"),
    (0xE799, "\u{900B}"), (0xE79A, "\u{9027}"), (0xE79B, "\u{9036}"), (0xE79C, "\u{9035}"),
    (0xE79D, "\u{9039}"), (0xE79E, "\u{8FF8}"), (0xE79F, "\u{904F}"), (0xE7A0, "\u{9050}"),
    (0xE7A1, "\u{9051}"), (0xE7A2, "\u{9052}"), (0xE7A3, "\u{900E}"), (0xE7A4, "\u{9049}"),
    (0xE7A5, "\u{903E}"), (0xE7A6, "\u{9056}"), (0xE7A7, "\u{9058}"), (0xE7A8, "\u{905E}"),
    (0xE7A9, "\u{9068}"), (0xE7AA, "\u{906F}"), (0xE7AB, "\u{9076}"), (0xE7AC, "\u{96A8}"),
    (0xE7AD, "\u{9072}"), (0xE7AE, "\u{9082}"), (0xE7AF, "\u{907D}"), (0xE7B0, "\u{9081}"),
    (0xE7B1, "\u{9080}"), (0xE7B2, "\u{908A}"), (0xE7B3, "\u{9089}"), (0xE7B4, "\u{908F}"),
    (0xE7B5, "\u{90A8}"), (0xE7B6, "\u{90AF}"), (0xE7B7, "\u{90B1}"), (0xE7B8, "\u{90B5}"),
    (0xE7B9, "\u{90E2}"), (0xE7BA, "\u{90E4}"), (0xE7BB, "\u{6248}"), (0xE7BC, "\u{90DB}"),
    (0xE7BD, "\u{9102}"), (0xE7BE, "\u{9112}"), (0xE7BF, "\u{9119}"), (0xE7C0, "\u{9132}"),
    (0xE7C1, "\u{9130}"), (0xE7C2, "\u{914A}"), (0xE7C3, "\u{9156}"), (0xE7C4, "\u{9158}"),
    (0xE7C5, "\u{9163}"), (0xE7C6, "\u{9165}"), (0xE7C7, "\u{9169}"), (0xE7C8, "\u{9173}"),
    (0xE7C9, "\u{9172}"), (0xE7CA, "\u{918B}"), (0xE7CB, "\u{9189}"), (0xE7CC, "\u{9182}"),
    (0xE7CD, "\u{91A2}"), (0xE7CE, "\u{91AB}"), (0xE7CF, "\u{91AF}"), (0xE7D0, "\u{91AA}"),
    (0xE7D1, "\u{91B5}"), (0xE7D2, "\u{91B4}"), (0xE7D3, "\u{91BA}"), (0xE7D4, "\u{91C0}"),
    (0xE7D5, "\u{91C1}"), (0xE7D6, "\u{91C9}"), (0xE7D7, "\u{91CB}"), (0xE7D8, "\u{91D0}"),
    (0xE7D9, "\u{91D6}"), (0xE7DA, "\u{91DF}"), (0xE7DB, "\u{91E1}"), (0xE7DC, "\u{91DB}"),
    (0xE7DD, "\u{91FC}"), (0xE7DE, "\u{91F5}"), (0xE7DF, "\u{91F6}"), (0xE7E0, "\u{921E}"),
    (0xE7E1, "\u{91FF}"), (0xE7E2, "\u{9214}"), (0xE7E3, "\u{922C}"), (0xE7E4, "\u{9215}"),
    (0xE7E5, "\u{9211}"), (0xE7E6, "\u{925E}"), (0xE7E7, "\u{9257}"), (0xE7E8, "\u{9245}"),
    (0xE7E9, "\u{9249}"), (0xE7EA, "\u{9264}"), (0xE7EB, "\u{9248}"), (0xE7EC, "\u{9295}"),
    (0xE7ED, "\u{923F}"), (0xE7EE, "\u{924B}"), (0xE7EF, "\u{9250}"), (0xE7F0, "\u{929C}"),
    (0xE7F1, "\u{9296}"), (0xE7F2, "\u{9293}"), (0xE7F3, "\u{929B}"), (0xE7F4, "\u{925A}"),
    (0xE7F5, "\u{92CF}"), (0xE7F6, "\u{92B9}"), (0xE7F7, "\u{92B7}"), (0xE7F8, "\u{92E9}"),
    (0xE7F9, "\u{930F}"), (0xE7FA, "\u{92FA}"), (0xE7FB, "\u{9344}"), (0xE7FC, "\u{932E}"),
    (0xE840, "\u{9319}"), (0xE841, "\u{9322}"), (0xE842, "\u{931A}"), (0xE843, "\u{9323}"),
    (0xE844, "\u{933A}"), (0xE845, "\u{9335}"), (0xE846, "\u{933B}"), (0xE847, "\u{935C}"),
    (0xE848, "\u{9360}"), (0xE849, "\u{937C}"), (0xE84A, "\u{936E}"), (0xE84B, "\u{9356}"),
    (0xE84C, "\u{93B0}"), (0xE84D, "\u{93AC}"), (0xE84E, "\u{93AD}"), (0xE84F, "\u{9394}"),
    (0xE850, "\u{93B9}"), (0xE851, "\u{93D6}"), (0xE852, "\u{93D7}"), (0xE853, "\u{93E8}"),
    (0xE854, "\u{93E5}"), (0xE855, "\u{93D8}"), (0xE856, "\u{93C3}"), (0xE857, "\u{93DD}"),
    (0xE858, "\u{93D0}"), (0xE859, "\u{93C8}"), (0xE85A, "\u{93E4}"), (0xE85B, "\u{941A}"),
    (0xE85C, "\u{9414}"), (0xE85D, "\u{9413}"), (0xE85E, "\u{9403}"), (0xE85F, "\u{9407}"),
    (0xE860, "\u{9410}"), (0xE861, "\u{9436}"), (0xE862, "\u{942B}"), (0xE863, "\u{9435}"),
    (0xE864, "\u{9421}"), (0xE865, "\u{943A}"), (0xE866, "\u{9441}"), (0xE867, "\u{9452}"),
    (0xE868, "\u{9444}"), (0xE869, "\u{945B}"), (0xE86A, "\u{9460}"), (0xE86B, "\u{9462}"),
    (0xE86C, "\u{945E}"), (0xE86D, "\u{946A}"), (0xE86E, "\u{9229}"), (0xE86F, "\u{9470}"),
    (0xE870, "\u{9475}"), (0xE871, "\u{9477}"), (0xE872, "\u{947D}"), (0xE873, "\u{945A}"),
    (0xE874, "\u{947C}"), (0xE875, "\u{947E}"), (0xE876, "\u{9481}"), (0xE877, "\u{947F}"),
    (0xE878, "\u{9582}"), (0xE879, "\u{9587}"), (0xE87A, "\u{958A}"), (0xE87B, "\u{9594}"),
    (0xE87C, "\u{9596}"), (0xE87D, "\u{9598}"), (0xE87E, "\u{9599}"), (0xE880, "\u{95A0}"),
    (0xE881, "\u{95A8}"), (0xE882, "\u{95A7}"), (0xE883, "\u{95AD}"), (0xE884, "\u{95BC}"),
    (0xE885, "\u{95BB}"), (0xE886, "\u{95B9}"), (0xE887, "\u{95BE}"), (0xE888, "\u{95CA}"),
    (0xE889, "\u{6FF6}"), (0xE88A, "\u{95C3}"), (0xE88B, "\u{95CD}"), (0xE88C, "\u{95CC}"),
    (0xE88D, "\u{95D5}"), (0xE88E, "\u{95D4}"), (0xE88F, "\u{95D6}"), (0xE890, "\u{95DC}"),
    (0xE891, "\u{95E1}"), (0xE892, "\u{95E5}"), (0xE893, "\u{95E2}"), (0xE894, "\u{9621}"),
    (0xE895, "\u{9628}"), (0xE896, "\u{962E}"), (0xE897, "\u{962F}"), (0xE898, "\u{9642}"),
    (0xE899, "\u{964C}"), (0xE89A, "\u{964F}"), (0xE89B, "\u{964B}"), (0xE89C, "\u{9677}"),
    (0xE89D, "\u{965C}"), (0xE89E, "\u{965E}"), (0xE89F, "\u{965D}"), (0xE8A0, "\u{965F}"),
    (0xE8A1, "\u{9666}"), (0xE8A2, "\u{9672}"), (0xE8A3, "\u{966C}"), (0xE8A4, "\u{968D}"),
    (0xE8A5, "\u{9698}"), (0xE8A6, "\u{9695}"), (0xE8A7, "\u{9697}"), (0xE8A8, "\u{96AA}"),
    (0xE8A9, "\u{96A7}"), (0xE8AA, "\u{96B1}"), (0xE8AB, "\u{96B2}"), (0xE8AC, "\u{96B0}"),
    (0xE8AD, "\u{96B4}"), (0xE8AE, "\u{96B6}"), (0xE8AF, "\u{96B8}"), (0xE8B0, "\u{96B9}"),
    (0xE8B1, "\u{96CE}"), (0xE8B2, "\u{96CB}"), (0xE8B3, "\u{96C9}"), (0xE8B4, "\u{96CD}"),
    (0xE8B5, "\u{894D}"), (0xE8B6, "\u{96DC}"), (0xE8B7, "\u{970D}"), (0xE8B8, "\u{96D5}"),
    (0xE8B9, "\u{96F9}"), (0xE8BA, "\u{9704}"), (0xE8BB, "\u{9706}"), (0xE8BC, "\u{9708}"),
    (0xE8BD, "\u{9713}"), (0xE8BE, "\u{970E}"), (0xE8BF, "\u{9711}"), (0xE8C0, "\u{970F}"),
    (0xE8C1, "\u{9716}"), (0xE8C2, "\u{9719}"), (0xE8C3, "\u{9724}"), (0xE8C4, "\u{972A}"),
    (0xE8C5, "\u{9730}"), (0xE8C6, "\u{9739}"), (0xE8C7, "\u{973D}"), (0xE8C8, "\u{973E}"),
    (0xE8C9, "\u{9744}"), (0xE8CA, "\u{9746}"), (0xE8CB, "\u{9748}"), (0xE8CC, "\u{9742}"),
    (0xE8CD, "\u{9749}"), (0xE8CE, "\u{975C}"), (0xE8CF, "\u{9760}"), (0xE8D0, "\u{9764}"),
    (0xE8D1, "\u{9766}"), (0xE8D2, "\u{9768}"), (0xE8D3, "\u{52D2}"), (0xE8D4, "\u{976B}"),
    (0xE8D5, "\u{9771}"), (0xE8D6, "\u{9779}"), (0xE8D7, "\u{9785}"), (0xE8D8, "\u{977C}"),
    (0xE8D9, "\u{9781}"), (0xE8DA, "\u{977A}"), (0xE8DB, "\u{9786}"), (0xE8DC, "\u{978B}"),
    (0xE8DD, "\u{978F}"), (0xE8DE, "\u{9790}"), (0xE8DF, "\u{979C}"), (0xE8E0, "\u{97A8}"),
    (0xE8E1, "\u{97A6}"), (0xE8E2, "\u{97A3}"), (0xE8E3, "\u{97B3}"), (0xE8E4, "\u{97B4}"),
    (0xE8E5, "\u{97C3}"), (0xE8E6, "\u{97C6}"), (0xE8E7, "\u{97C8}"), (0xE8E8, "\u{97CB}"),
    (0xE8E9, "\u{97DC}"), (0xE8EA, "\u{97ED}"), (0xE8EB, "\u{9F4F}"), (0xE8EC, "\u{97F2}"),
    (0xE8ED, "\u{7ADF}"), (0xE8EE, "\u{97F6}"), (0xE8EF, "\u{97F5}"), (0xE8F0, "\u{980F}"),
    (0xE8F1, "\u{980C}"), (0xE8F2, "\u{9838}"), (0xE8F3, "\u{9824}"), (0xE8F4, "\u{9821}"),
    (0xE8F5, "\u{9837}"), (0xE8F6, "\u{983D}"), (0xE8F7, "\u{9846}"), (0xE8F8, "\u{984F}"),
    (0xE8F9, "\u{984B}"), (0xE8FA, "\u{986B}"), (0xE8FB, "\u{986F}"), (0xE8FC, "\u{9870}"),
    (0xE940, "\u{9871}"), (0xE941, "\u{9874}"), (0xE942, "\u{9873}"), (0xE943, "\u{98AA}"),
    (0xE944, "\u{98AF}"), (0xE945, "\u{98B1}"), (0xE946, "\u{98B6}"), (0xE947, "\u{98C4}"),
    (0xE948, "\u{98C3}"), (0xE949, "\u{98C6}"), (0xE94A, "\u{98E9}"), (0xE94B, "\u{98EB}"),
    (0xE94C, "\u{9903}"), (0xE94D, "\u{9909}"), (0xE94E, "\u{9912}"), (0xE94F, "\u{9914}"),
    (0xE950, "\u{9918}"), (0xE951, "\u{9921}"), (0xE952, "\u{991D}"), (0xE953, "\u{991E}"),
    (0xE954, "\u{9924}"), (0xE955, "\u{9920}"), (0xE956, "\u{992C}"), (0xE957, "\u{992E}"),
    (0xE958, "\u{993D}"), (0xE959, "\u{993E}"), (0xE95A, "\u{9942}"), (0xE95B, "\u{9949}"),
    (0xE95C, "\u{9945}"), (0xE95D, "\u{9950}"), (0xE95E, "\u{994B}"), (0xE95F, "\u{9951}"),
    (0xE960, "\u{9952}"), (0xE961, "\u{994C}"), (0xE962, "\u{9955}"), (0xE963, "\u{9997}"),
    (0xE964, "\u{9998}"), (0xE965, "\u{99A5}"), (0xE966, "\u{99AD}"), (0xE967, "\u{99AE}"),
    (0xE968, "\u{99BC}"), (0xE969, "\u{99DF}"), (0xE96A, "\u{99DB}"), (0xE96B, "\u{99DD}"),
    (0xE96C, "\u{99D8}"), (0xE96D, "\u{99D1}"), (0xE96E, "\u{99ED}"), (0xE96F, "\u{99EE}"),
    (0xE970, "\u{99F1}"), (0xE971, "\u{99F2}"), (0xE972, "\u{99FB}"), (0xE973, "\u{99F8}"),
    (0xE974, "\u{9A01}"), (0xE975, "\u{9A0F}"), (0xE976, "\u{9A05}"), (0xE977, "\u{99E2}"),
    (0xE978, "\u{9A19}"), (0xE979, "\u{9A2B}"), (0xE97A, "\u{9A37}"), (0xE97B, "\u{9A45}"),
    (0xE97C, "\u{9A42}"), (0xE97D, "\u{9A40}"), (0xE97E, "\u{9A43}"), (0xE980, "\u{9A3E}"),
    (0xE981, "\u{9A55}"), (0xE982, "\u{9A4D}"), (0xE983, "\u{9A5B}"), (0xE984, "\u{9A57}"),
    (0xE985, "\u{9A5F}"), (0xE986, "\u{9A62}"), (0xE987, "\u{9A65}"), (0xE988, "\u{9A64}"),
    (0xE989, "\u{9A69}"), (0xE98A, "\u{9A6B}"), (0xE98B, "\u{9A6A}"), (0xE98C, "\u{9AAD}"),
    (0xE98D, "\u{9AB0}"), (0xE98E, "\u{9ABC}"), (0xE98F, "\u{9AC0}"), (0xE990, "\u{9ACF}"),
    (0xE991, "\u{9AD1}"), (0xE992, "\u{9AD3}"), (0xE993, "\u{9AD4}"), (0xE994, "\u{9ADE}"),
    (0xE995, "\u{9ADF}"), (0xE996, "\u{9AE2}"), (0xE997, "\u{9AE3}"), (0xE998, "\u{9AE6}"),
    (0xE999, "\u{9AEF}"), (0xE99A, "\u{9AEB}"), (0xE99B, "\u{9AEE}"), (0xE99C, "\u{9AF4}"),
    (0xE99D, "\u{9AF1}"), (0xE99E, "\u{9AF7}"), (0xE99F, "\u{9AFB}"), (0xE9A0, "\u{9B06}"),
    (0xE9A1, "\u{9B18}"), (0xE9A2, "\u{9B1A}"), (0xE9A3, "\u{9B1F}"), (0xE9A4, "\u{9B22}"),
    (0xE9A5, "\u{9B23}"), (0xE9A6, "\u{9B25}"), (0xE9A7, "\u{9B27}"), (0xE9A8, "\u{9B28}"),
    (0xE9A9, "\u{9B29}"), (0xE9AA, "\u{9B2A}"), (0xE9AB, "\u{9B2E}"), (0xE9AC, "\u{9B2F}"),
    (0xE9AD, "\u{9B32}"), (0xE9AE, "\u{9B44}"), (0xE9AF, "\u{9B43}"), (0xE9B0, "\u{9B4F}"),
    (0xE9B1, "\u{9B4D}"), (0xE9B2, "\u{9B4E}"), (0xE9B3, "\u{9B51}"), (0xE9B4, "\u{9B58}"),
    (0xE9B5, "\u{9B74}"), (0xE9B6, "\u{9B93}"), (0xE9B7, "\u{9B83}"), (0xE9B8, "\u{9B91}"),
    (0xE9B9, "\u{9B96}"), (0xE9BA, "\u{9B97}"), (0xE9BB, "\u{9B9F}"), (0xE9BC, "\u{9BA0}"),
    (0xE9BD, "\u{9BA8}"), (0xE9BE, "\u{9BB4}"), (0xE9BF, "\u{9BC0}"), (0xE9C0, "\u{9BCA}"),
    (0xE9C1, "\u{9BB9}"), (0xE9C2, "\u{9BC6}"), (0xE9C3, "\u{9BCF}"), (0xE9C4, "\u{9BD1}"),
    (0xE9C5, "\u{9BD2}"), (0xE9C6, "\u{9BE3}"), (0xE9C7, "\u{9BE2}"), (0xE9C8, "\u{9BE4}"),
    (0xE9C9, "\u{9BD4}"), (0xE9CA, "\u{9BE1}"), (0xE9CB, "\u{9C3A}"), (0xE9CC, "\u{9BF2}"),
    (0xE9CD, "\u{9BF1}"), (0xE9CE, "\u{9BF0}"), (0xE9CF, "\u{9C15}"), (0xE9D0, "\u{9C14}"),
    (0xE9D1, "\u{9C09}"), (0xE9D2, "\u{9C13}"), (0xE9D3, "\u{9C0C}"), (0xE9D4, "\u{9C06}"),
    (0xE9D5, "\u{9C08}"), (0xE9D6, "\u{9C12}"), (0xE9D7, "\u{9C0A}"), (0xE9D8, "\u{9C04}"),
    (0xE9D9, "\u{9C2E}"), (0xE9DA, "\u{9C1B}"), (0xE9DB, "\u{9C25}"), (0xE9DC, "\u{9C24}"),
    (0xE9DD, "\u{9C21}"), (0xE9DE, "\u{9C30}"), (0xE9DF, "\u{9C47}"), (0xE9E0, "\u{9C32}"),
    (0xE9E1, "\u{9C46}"), (0xE9E2, "\u{9C3E}"), (0xE9E3, "\u{9C5A}"), (0xE9E4, "\u{9C60}"),
    (0xE9E5, "\u{9C67}"), (0xE9E6, "\u{9C76}"), (0xE9E7, "\u{9C78}"), (0xE9E8, "\u{9CE7}"),
    (0xE9E9, "\u{9CEC}"), (0xE9EA, "\u{9CF0}"), (0xE9EB, "\u{9D09}"), (0xE9EC, "\u{9D08}"),
    (0xE9ED, "\u{9CEB}"), (0xE9EE, "\u{9D03}"), (0xE9EF, "\u{9D06}"), (0xE9F0, "\u{9D2A}"),
    (0xE9F1, "\u{9D26}"), (0xE9F2, "\u{9DAF}"), (0xE9F3, "\u{9D23}"), (0xE9F4, "\u{9D1F}"),
    (0xE9F5, "\u{9D44}"), (0xE9F6, "\u{9D15}"), (0xE9F7, "\u{9D12}"), (0xE9F8, "\u{9D41}"),
    (0xE9F9, "\u{9D3F}"), (0xE9FA, "\u{9D3E}"), (0xE9FB, "\u{9D46}"), (0xE9FC, "\u{9D48}"),
    (0xEA40, "\u{9D5D}"), (0xEA41, "\u{9D5E}"), (0xEA42, "\u{9D64}"), (0xEA43, "\u{9D51}"),
    (0xEA44, "\u{9D50}"), (0xEA45, "\u{9D59}"), (0xEA46, "\u{9D72}"), (0xEA47, "\u{9D89}"),
    (0xEA48, "\u{9D87}"), (0xEA49, "\u{9DAB}"), (0xEA4A, "\u{9D6F}"), (0xEA4B, "\u{9D7A}"),
    (0xEA4C, "\u{9D9A}"), (0xEA4D, "\u{9DA4}"), (0xEA4E, "\u{9DA9}"), (0xEA4F, "\u{9DB2}"),
    (0xEA50, "\u{9DC4}"), (0xEA51, "\u{9DC1}"), (0xEA52, "\u{9DBB}"), (0xEA53, "\u{9DB8}"),
    (0xEA54, "\u{9DBA}"), (0xEA55, "\u{9DC6}"), (0xEA56, "\u{9DCF}"), (0xEA57, "\u{9DC2}"),
    (0xEA58, "\u{9DD9}"), (0xEA59, "\u{9DD3}"), (0xEA5A, "\u{9DF8}"), (0xEA5B, "\u{9DE6}"),
    (0xEA5C, "\u{9DED}"), (0xEA5D, "\u{9DEF}"), (0xEA5E, "\u{9DFD}"), (0xEA5F, "\u{9E1A}"),
    (0xEA60, "\u{9E1B}"), (0xEA61, "\u{9E1E}"), (0xEA62, "\u{9E75}"), (0xEA63, "\u{9E79}"),
    (0xEA64, "\u{9E7D}"), (0xEA65, "\u{9E81}"), (0xEA66, "\u{9E88}"), (0xEA67, "\u{9E8B}"),
    (0xEA68, "\u{9E8C}"), (0xEA69, "\u{9E92}"), (0xEA6A, "\u{9E95}"), (0xEA6B, "\u{9E91}"),
    (0xEA6C, "\u{9E9D}"), (0xEA6D, "\u{9EA5}"), (0xEA6E, "\u{9EA9}"), (0xEA6F, "\u{9EB8}"),
    (0xEA70, "\u{9EAA}"), (0xEA71, "\u{9EAD}"), (0xEA72, "\u{9761}"), (0xEA73, "\u{9ECC}"),
    (0xEA74, "\u{9ECE}"), (0xEA75, "\u{9ECF}"), (0xEA76, "\u{9ED0}"), (0xEA77, "\u{9ED4}"),
    (0xEA78, "\u{9EDC}"), (0xEA79, "\u{9EDE}"), (0xEA7A, "\u{9EDD}"), (0xEA7B, "\u{9EE0}"),
    (0xEA7C, "\u{9EE5}"), (0xEA7D, "\u{9EE8}"), (0xEA7E, "\u{9EEF}"), (0xEA80, "\u{9EF4}"),
    (0xEA81, "\u{9EF6}"), (0xEA82, "\u{9EF7}"), (0xEA83, "\u{9EF9}"), (0xEA84, "\u{9EFB}"),
    (0xEA85, "\u{9EFC}"), (0xEA86, "\u{9EFD}"), (0xEA87, "\u{9F07}"), (0xEA88, "\u{9F08}"),
    (0xEA89, "\u{76B7}"), (0xEA8A, "\u{9F15}"), (0xEA8B, "\u{9F21}"), (0xEA8C, "\u{9F2C}"),
    (0xEA8D, "\u{9F3E}"), (0xEA8E, "\u{9F4A}"), (0xEA8F, "\u{9F52}"), (0xEA90, "\u{9F54}"),
    (0xEA91, "\u{9F63}"), (0xEA92, "\u{9F5F}"), (0xEA93, "\u{9F60}"), (0xEA94, "\u{9F61}"),
    (0xEA95, "\u{9F66}"), (0xEA96, "\u{9F67}"), (0xEA97, "\u{9F6C}"), (0xEA98, "\u{9F6A}"),
    (0xEA99, "\u{9F77}"), (0xEA9A, "\u{9F72}"), (0xEA9B, "\u{9F76}"), (0xEA9C, "\u{9F95}"),
    (0xEA9D, "\u{9F9C}"), (0xEA9E, "\u{9FA0}"), (0xEA9F, "\u{582F}"), (0xEAA0, "\u{69C7}"),
    (0xEAA1, "\u{9059}"), (0xEAA2, "\u{7464}"), (0xEAA3, "\u{51DC}"), (0xEAA4, "\u{7199}"),
    (0xEB41, "\u{3001}\u{F87E}"), (0xEB42, "\u{3002}\u{F87E}"), (0xEB50, "\u{FFE3}\u{F87E}"),
    (0xEB51, "\u{FE33}"), (0xEB5B, "\u{30FC}\u{F87E}"), (0xEB5C, "\u{FE31}"),
    (0xEB5D, "\u{2010}\u{F87E}"), (0xEB60, "\u{301C}\u{F87E}"), (0xEB61, "\u{2016}\u{F87E}"),
    (0xEB62, "\u{FF5C}\u{F87E}"), (0xEB63, "\u{2026}\u{F87E}"), (0xEB64, "\u{FE30}"),
    (0xEB69, "\u{FE35}"), (0xEB6A, "\u{FE36}"), (0xEB6B, "\u{FE39}"), (0xEB6C, "\u{FE3A}"),
    (0xEB6D, "\u{FF3B}\u{F87E}"), (0xEB6E, "\u{FF3D}\u{F87E}"), (0xEB6F, "\u{FE37}"),
    (0xEB70, "\u{FE38}"), (0xEB71, "\u{FE3F}"), (0xEB72, "\u{FE40}"), (0xEB73, "\u{FE3D}"),
    (0xEB74, "\u{FE3E}"), (0xEB75, "\u{FE41}"), (0xEB76, "\u{FE42}"), (0xEB77, "\u{FE43}"),
    (0xEB78, "\u{FE44}"), (0xEB79, "\u{FE3B}"), (0xEB7A, "\u{FE3C}"), (0xEB81, "\u{FF1D}\u{F87E}"),
    (0xEC9F, "\u{3041}\u{F87E}"), (0xECA1, "\u{3043}\u{F87E}"), (0xECA3, "\u{3045}\u{F87E}"),
    (0xECA5, "\u{3047}\u{F87E}"), (0xECA7, "\u{3049}\u{F87E}"), (0xECC1, "\u{3063}\u{F87E}"),
    (0xECE1, "\u{3083}\u{F87E}"), (0xECE3, "\u{3085}\u{F87E}"), (0xECE5, "\u{3087}\u{F87E}"),
    (0xECEC, "\u{308E}\u{F87E}"), (0xED40, "\u{30A1}\u{F87E}"), (0xED42, "\u{30A3}\u{F87E}"),
    (0xED44, "\u{30A5}\u{F87E}"), (0xED46, "\u{30A7}\u{F87E}"), (0xED48, "\u{30A9}\u{F87E}"),
    (0xED62, "\u{30C3}\u{F87E}"), (0xED83, "\u{30E3}\u{F87E}"), (0xED85, "\u{30E5}\u{F87E}"),
    (0xED87, "\u{30E7}\u{F87E}"), (0xED8E, "\u{30EE}\u{F87E}"), (0xED95, "\u{30F5}\u{F87E}"),
    (0xED96, "\u{30F6}\u{F87E}"),
];
